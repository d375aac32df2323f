use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use viewforge_model::ComponentKind;

/// Declared value type of one component prop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Node,
    Function,
}

/// Schema for a single prop of a component definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropSchema {
    #[serde(rename = "type")]
    pub prop_type: PropType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Allowed values, if the prop is an enumeration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

impl PropSchema {
    pub fn new(prop_type: PropType) -> Self {
        Self {
            prop_type,
            default: None,
            options: None,
            required: false,
            description: String::new(),
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Metadata describing one kind of placeable component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    pub name: String,
    pub category: ComponentKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub props: BTreeMap<String, PropSchema>,
}

impl ComponentDefinition {
    pub fn new(name: impl Into<String>, category: ComponentKind) -> Self {
        Self {
            name: name.into(),
            category,
            description: String::new(),
            tags: Vec::new(),
            props: BTreeMap::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, schema: PropSchema) -> Self {
        self.props.insert(name.into(), schema);
        self
    }
}

/// Catalog of known component kinds, keyed by name
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    definitions: HashMap<String, ComponentDefinition>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite by name. Re-registering replaces the entry,
    /// so catalog reload is safe to run repeatedly.
    pub fn register(&mut self, definition: ComponentDefinition) {
        self.definitions
            .insert(definition.name.clone(), definition);
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDefinition> {
        self.definitions.get(name)
    }

    /// Snapshot of all definitions in a category
    pub fn by_category(&self, category: ComponentKind) -> Vec<ComponentDefinition> {
        let mut found: Vec<ComponentDefinition> = self
            .definitions
            .values()
            .filter(|d| d.category == category)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    /// Case-insensitive substring search over name, description and tags
    pub fn search(&self, query: &str) -> Vec<ComponentDefinition> {
        let query = query.to_lowercase();
        let mut found: Vec<ComponentDefinition> = self
            .definitions
            .values()
            .filter(|d| {
                d.name.to_lowercase().contains(&query)
                    || d.description.to_lowercase().contains(&query)
                    || d.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    /// Declared default values for a component's props
    pub fn default_props(&self, name: &str) -> BTreeMap<String, Value> {
        let mut defaults = BTreeMap::new();
        if let Some(definition) = self.get(name) {
            for (prop_name, schema) in &definition.props {
                if let Some(default) = &schema.default {
                    defaults.insert(prop_name.clone(), default.clone());
                }
            }
        }
        defaults
    }

    pub fn clear(&mut self) {
        self.definitions.clear();
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn button() -> ComponentDefinition {
        ComponentDefinition::new("Button", ComponentKind::Atomic)
            .describe("Clickable button")
            .tag("form")
            .prop(
                "variant",
                PropSchema::new(PropType::String)
                    .with_default(json!("primary"))
                    .with_options(&["primary", "secondary", "ghost"]),
            )
            .prop("disabled", PropSchema::new(PropType::Boolean).with_default(json!(false)))
    }

    #[test]
    fn test_register_is_idempotent_overwrite() {
        let mut registry = ComponentRegistry::new();
        registry.register(button());
        registry.register(button().describe("Replaced"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Button").unwrap().description, "Replaced");
    }

    #[test]
    fn test_search_matches_name_description_tags() {
        let mut registry = ComponentRegistry::new();
        registry.register(button());

        assert_eq!(registry.search("BUTT").len(), 1);
        assert_eq!(registry.search("clickable").len(), 1);
        assert_eq!(registry.search("form").len(), 1);
        assert!(registry.search("table").is_empty());
    }

    #[test]
    fn test_search_returns_snapshots() {
        let mut registry = ComponentRegistry::new();
        registry.register(button());

        let mut snapshot = registry.search("button");
        snapshot[0].description = "mutated".to_string();
        assert_eq!(registry.get("Button").unwrap().description, "Clickable button");
    }

    #[test]
    fn test_default_props_collects_declared_defaults() {
        let mut registry = ComponentRegistry::new();
        registry.register(button());

        let defaults = registry.default_props("Button");
        assert_eq!(defaults.get("variant"), Some(&json!("primary")));
        assert_eq!(defaults.get("disabled"), Some(&json!(false)));
        assert!(registry.default_props("Unknown").is_empty());
    }

    #[test]
    fn test_clear_empties_catalog() {
        let mut registry = ComponentRegistry::new();
        registry.register(button());
        registry.clear();
        assert!(registry.is_empty());
    }
}
