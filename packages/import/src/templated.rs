//! Templated (server-side) document import.
//!
//! The templated format embeds a complete markup document between a
//! doctype marker and the closing document tag; everything outside
//! that window is opaque and ignored.

use crate::error::ParseError;
use crate::markup::parse_markup;
use crate::parsed::{ParsedView, SourceFormat};
use viewforge_model::OutputFormat;
use viewforge_registry::ComponentRegistry;

const DOCTYPE_MARKER: &str = "<!DOCTYPE";
const CLOSING_TAG: &str = "</html>";

pub fn parse_templated(source: &str, registry: &ComponentRegistry) -> ParsedView {
    let Some(window) = extract_document(source) else {
        return ParsedView::failure(
            SourceFormat::Php,
            vec![ParseError::MissingDocument.to_string()],
        );
    };

    let mut result = parse_markup(window, registry);
    result.source_format = SourceFormat::Php;
    if result.parsed {
        result.document.settings.format = OutputFormat::Php;
    }
    result
}

/// The markup substring from the doctype marker through the closing tag
fn extract_document(source: &str) -> Option<&str> {
    let start = source
        .find(DOCTYPE_MARKER)
        .or_else(|| source.find("<!doctype"))?;
    let end = source
        .rfind(CLOSING_TAG)
        .or_else(|| source.rfind("</HTML>"))?;
    if end < start {
        return None;
    }
    Some(&source[start..end + CLOSING_TAG.len()])
}
