//! Canonical structured-data (JSON) import.

use crate::parsed::{ParsedView, SourceFormat};
use serde_json::Value;
use tracing::debug;
use viewforge_model::ViewDocument;

/// Deserialize the canonical JSON format. The candidate is rejected
/// unless it structurally carries `id: string`, `name: string`, a
/// `root` object and a `metadata` object.
pub fn parse_structured(source: &str) -> ParsedView {
    let value: Value = match serde_json::from_str(source) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "structured import: invalid JSON");
            return ParsedView::failure(SourceFormat::Json, vec![err.to_string()]);
        }
    };

    if let Err(message) = check_shape(&value) {
        debug!(%message, "structured import: shape check failed");
        return ParsedView::failure(SourceFormat::Json, vec![message]);
    }

    match serde_json::from_value::<ViewDocument>(value) {
        Ok(document) => ParsedView::success(document, SourceFormat::Json),
        Err(err) => ParsedView::failure(SourceFormat::Json, vec![err.to_string()]),
    }
}

fn check_shape(value: &Value) -> Result<(), String> {
    let obj = value
        .as_object()
        .ok_or_else(|| "document must be a JSON object".to_string())?;

    if !obj.get("id").map(Value::is_string).unwrap_or(false) {
        return Err("missing string field: id".to_string());
    }
    if !obj.get("name").map(Value::is_string).unwrap_or(false) {
        return Err("missing string field: name".to_string());
    }
    if !obj.get("root").map(Value::is_object).unwrap_or(false) {
        return Err("missing object field: root".to_string());
    }
    if !obj.get("metadata").map(Value::is_object).unwrap_or(false) {
        return Err("missing object field: metadata".to_string());
    }
    Ok(())
}
