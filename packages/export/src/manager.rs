//! Export orchestration: per-format payloads and file delivery.

use crate::markup::{generate_markup, GeneratedPage};
use crate::templated::generate_templated;
use thiserror::Error;
use viewforge_common::{slugify, FileWriter};
use viewforge_model::ViewDocument;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Formats the manager can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Html,
    Php,
    Both,
}

/// One deliverable file
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub filename: String,
    pub content: String,
    pub mime: &'static str,
}

pub struct ExportManager;

impl ExportManager {
    /// Canonical lossless serialization
    pub fn export_json(doc: &ViewDocument) -> Result<ExportPayload, ExportError> {
        let content = serde_json::to_string_pretty(doc)?;
        let mut slug = slugify(&doc.name);
        if slug.is_empty() {
            slug = "view".to_string();
        }
        Ok(ExportPayload {
            filename: format!("{}.json", slug),
            content,
            mime: "application/json",
        })
    }

    pub fn export_markup(doc: &ViewDocument) -> ExportPayload {
        payload_of(generate_markup(doc), "text/html")
    }

    pub fn export_templated(doc: &ViewDocument) -> ExportPayload {
        payload_of(generate_templated(doc), "application/x-httpd-php")
    }

    /// Markup and templated output together
    pub fn export_both(doc: &ViewDocument) -> Vec<ExportPayload> {
        vec![Self::export_markup(doc), Self::export_templated(doc)]
    }

    pub fn payloads_for(
        doc: &ViewDocument,
        format: ExportFormat,
    ) -> Result<Vec<ExportPayload>, ExportError> {
        Ok(match format {
            ExportFormat::Json => vec![Self::export_json(doc)?],
            ExportFormat::Html => vec![Self::export_markup(doc)],
            ExportFormat::Php => vec![Self::export_templated(doc)],
            ExportFormat::Both => Self::export_both(doc),
        })
    }

    /// Write the export through the injected file-writing collaborator.
    /// Any writer failure propagates.
    pub fn save_to_file(
        doc: &ViewDocument,
        format: ExportFormat,
        writer: &mut dyn FileWriter,
    ) -> Result<Vec<ExportPayload>, ExportError> {
        let payloads = Self::payloads_for(doc, format)?;
        for payload in &payloads {
            writer.write(&payload.filename, &payload.content)?;
        }
        Ok(payloads)
    }
}

fn payload_of(page: GeneratedPage, mime: &'static str) -> ExportPayload {
    ExportPayload {
        filename: page.filename,
        content: page.content,
        mime,
    }
}
