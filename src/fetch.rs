//! Estimate Loading
//!
//! Fetches the static estimate document over HTTP and hands it to the parser.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use estimate_core::{parse_document, Estimate};

/// GET `url` and return the body as text. Non-2xx responses are errors.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "No window object".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("Request failed: {:?}", e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "Fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {} for {}", response.status(), url));
    }

    let body = response
        .text()
        .map_err(|e| format!("Failed to read body: {:?}", e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| format!("Failed to read body: {:?}", e))?;
    text.as_string().ok_or_else(|| "Response body is not text".to_string())
}

/// Fetch and validate the estimate document
pub async fn load_estimate(url: &str) -> Result<Estimate, String> {
    let text = fetch_text(url).await?;
    parse_document(&text).map_err(|e| e.to_string())
}
