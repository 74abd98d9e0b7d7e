//! Document Parsing
//!
//! Validates the `{ data: { sections: [...] } }` envelope and builds an
//! [`Estimate`] from it.

use serde::Deserialize;
use serde_json::Value;

use crate::error::DocumentError;
use crate::estimate::Estimate;
use crate::models::Section;

/// Parse and validate an estimate document.
///
/// Stored item totals are not trusted; they are recomputed on load.
pub fn parse_document(text: &str) -> Result<Estimate, DocumentError> {
    let root: Value = serde_json::from_str(text)?;

    let data = root
        .get("data")
        .filter(|data| data.is_object())
        .ok_or(DocumentError::MissingData)?;

    let Some(Value::Array(entries)) = data.get("sections") else {
        return Err(DocumentError::SectionsNotArray);
    };

    let mut sections = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let section = Section::deserialize(entry)
            .map_err(|source| DocumentError::InvalidSection { index, source })?;
        sections.push(section);
    }

    Ok(Estimate::from_sections(sections))
}
