//! Runtime Configuration
//!
//! Read once from the page query string: `?data=/path/to.json&log=debug`.

use log::LevelFilter;

/// Where the static estimate document is served from
pub const DEFAULT_DATA_URL: &str = "/data/data.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from a key lookup; blank or unparsable values keep the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("data").filter(|url| !url.trim().is_empty()) {
            config.data_url = url;
        }
        if let Some(level) = lookup("log").and_then(|level| level.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }

    /// Read the current page's query string
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match web_sys::UrlSearchParams::new_with_str(&search) {
            Ok(params) => Self::from_lookup(|key| params.get(key)),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_url, "/data/data.json");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[("data", "/estimates/kitchen.json"), ("log", "DEBUG")]));
        assert_eq!(config.data_url, "/estimates/kitchen.json");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[("data", "  "), ("log", "loud")]));
        assert_eq!(config, AppConfig::default());
    }
}
