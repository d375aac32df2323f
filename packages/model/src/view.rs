use crate::node::ComponentNode;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use viewforge_common::IdGenerator;

/// Output format requested for a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Php,
    Both,
}

/// The editable unit: one root tree plus metadata and export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Always a container kind, never removed
    pub root: ComponentNode,
    pub metadata: ViewMetadata,
    #[serde(default)]
    pub settings: ViewSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewMetadata {
    /// RFC 3339 timestamps
    pub created: String,
    pub updated: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSettings {
    pub format: OutputFormat,
    pub include_styles: bool,
    pub minify: bool,
    pub portable: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            include_styles: true,
            minify: false,
            portable: true,
        }
    }
}

pub const GENERATOR_VERSION: &str = "1.0.0";

/// Current timestamp in the metadata wire format
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl ViewDocument {
    /// Fresh view with an empty container root
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let mut ids = IdGenerator::new(&name);
        let view_id = format!("view-{}", ids.seed());
        let root = ComponentNode::container(ids.next_id());
        let now = now_timestamp();

        Self {
            id: view_id,
            name,
            description: description.into(),
            root,
            metadata: ViewMetadata {
                created: now.clone(),
                updated: now,
                version: GENERATOR_VERSION.to_string(),
                author: None,
            },
            settings: ViewSettings::default(),
        }
    }

    /// Minimal valid document used as the fallback when an import fails
    pub fn empty() -> Self {
        Self::new("Untitled View", "")
    }

    /// Mark the document as edited now
    pub fn touch(&mut self) {
        self.metadata.updated = now_timestamp();
    }
}
