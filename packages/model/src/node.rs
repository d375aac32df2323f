use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Coarse classification of a component, used for icons and import inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Atomic,
    Composite,
    Complex,
    Template,
}

/// One placed component instance in the view tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    /// Unique within one tree, stable for the node's lifetime
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ComponentKind,

    /// Registry key identifying which component this node instantiates
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// CSS property overrides, keys in camelCase
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,

    /// Insertion order is render order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
}

impl ComponentNode {
    pub fn new(id: impl Into<String>, kind: ComponentKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            props: BTreeMap::new(),
            class_name: None,
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Container node suitable as a view root
    pub fn container(id: impl Into<String>) -> Self {
        Self::new(id, ComponentKind::Template, "Container")
    }

    /// Pre-order depth-first lookup, first match wins
    pub fn find_node(&self, id: &str) -> Option<&ComponentNode> {
        if self.id == id {
            return Some(self);
        }
        for child in &self.children {
            if let Some(found) = child.find_node(id) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_node_mut(&mut self, id: &str) -> Option<&mut ComponentNode> {
        if self.id == id {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_node_mut(id) {
                return Some(found);
            }
        }
        None
    }

    /// Find the node whose direct child list contains `id`
    pub fn find_parent_of(&self, id: &str) -> Option<&ComponentNode> {
        if self.children.iter().any(|c| c.id == id) {
            return Some(self);
        }
        for child in &self.children {
            if let Some(found) = child.find_parent_of(id) {
                return Some(found);
            }
        }
        None
    }

    /// Whether `id` names this node or any descendant
    pub fn contains(&self, id: &str) -> bool {
        self.find_node(id).is_some()
    }

    /// Total node count of this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    pub fn collect_ids(&self, out: &mut Vec<String>) {
        out.push(self.id.clone());
        for child in &self.children {
            child.collect_ids(out);
        }
    }

    /// Remove the direct or transitive child with `id` and return it,
    /// detaching its entire subtree intact
    pub fn remove_descendant(&mut self, id: &str) -> Option<ComponentNode> {
        if let Some(pos) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(pos));
        }
        for child in &mut self.children {
            if let Some(removed) = child.remove_descendant(id) {
                return Some(removed);
            }
        }
        None
    }

    /// Insert `node` into this node's children at `index`, clamped to bounds
    pub fn insert_child(&mut self, index: usize, node: ComponentNode) {
        let index = index.min(self.children.len());
        self.children.insert(index, node);
    }
}
