use serde::{Deserialize, Serialize};
use viewforge_model::ViewDocument;

/// Where an imported document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Json,
    Html,
    Php,
}

/// Result contract for every import entry point.
///
/// Imports never fail out of the function: on any error `parsed` is
/// false, the messages are collected, and `document` is a minimal
/// empty view so callers can always proceed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedView {
    pub document: ViewDocument,
    pub source_format: SourceFormat,
    pub parsed: bool,
    pub errors: Vec<String>,
}

impl ParsedView {
    pub fn success(document: ViewDocument, source_format: SourceFormat) -> Self {
        Self {
            document,
            source_format,
            parsed: true,
            errors: Vec::new(),
        }
    }

    pub fn failure(source_format: SourceFormat, errors: Vec<String>) -> Self {
        Self {
            document: ViewDocument::empty(),
            source_format,
            parsed: false,
            errors,
        }
    }
}
