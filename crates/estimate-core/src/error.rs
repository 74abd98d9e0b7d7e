//! Document errors

use thiserror::Error;

/// Reasons a fetched estimate document is rejected
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("document has no `data` object")]
    MissingData,

    #[error("`data.sections` is missing or not an array")]
    SectionsNotArray,

    #[error("section #{index} is malformed: {source}")]
    InvalidSection {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
