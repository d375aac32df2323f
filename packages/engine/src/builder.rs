//! # Builder Engine
//!
//! Owns the current view document and applies all tree mutations.
//!
//! ## Contracts
//!
//! - Every committed mutation edits the live tree, touches
//!   `metadata.updated`, deep-clones the document into history, then
//!   notifies subscribers, all before control returns.
//! - "Not found" conditions return `false` and leave state unchanged;
//!   callers branch without error handling.
//! - Undo/redo install a fresh clone of a stored snapshot and never
//!   push new history entries.

use crate::history::History;
use crate::subscribers::{BuilderEvent, SubscriberId, SubscriberSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::debug;
use viewforge_common::IdGenerator;
use viewforge_model::{ComponentKind, ComponentNode, ViewDocument};
use viewforge_registry::{kind_for_name, ComponentRegistry};

/// Partial update applied to a node by `update_component`.
///
/// Each present field replaces the node's field wholesale, so a props
/// or styles edit must pass the fully merged map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodePatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ComponentKind>,
    pub props: Option<BTreeMap<String, Value>>,
    pub class_name: Option<String>,
    pub styles: Option<BTreeMap<String, String>>,
    pub children: Option<Vec<ComponentNode>>,
}

impl NodePatch {
    pub fn props(props: BTreeMap<String, Value>) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }

    pub fn styles(styles: BTreeMap<String, String>) -> Self {
        Self {
            styles: Some(styles),
            ..Self::default()
        }
    }
}

pub struct BuilderEngine {
    registry: Rc<ComponentRegistry>,
    current: Option<ViewDocument>,
    selected: Option<String>,
    dirty: bool,
    history: History,
    subscribers: SubscriberSet,
    ids: IdGenerator,
}

impl BuilderEngine {
    pub fn new(registry: Rc<ComponentRegistry>) -> Self {
        Self {
            registry,
            current: None,
            selected: None,
            dirty: false,
            history: History::new(),
            subscribers: SubscriberSet::new(),
            ids: IdGenerator::new("untitled"),
        }
    }

    pub fn with_history_cap(registry: Rc<ComponentRegistry>, cap: usize) -> Self {
        let mut engine = Self::new(registry);
        engine.history = History::with_max_levels(cap);
        engine
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn current_view(&self) -> Option<&ViewDocument> {
        self.current.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Convenience lookup into the current tree
    pub fn find_node(&self, node_id: &str) -> Option<&ComponentNode> {
        self.current.as_ref()?.root.find_node(node_id)
    }

    /// Build a fresh view with an empty container root and install it
    /// as current. History restarts at one entry.
    pub fn create_view(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> ViewDocument {
        let doc = ViewDocument::new(name, description);
        debug!(view_id = %doc.id, name = %doc.name, "creating view");

        self.ids = IdGenerator::new(&doc.name);
        self.history.reset(&doc);
        self.selected = None;
        self.dirty = false;
        let view_id = doc.id.clone();
        self.current = Some(doc.clone());
        self.subscribers
            .notify(&BuilderEvent::ViewInstalled { view_id });
        doc
    }

    /// Replace the current document wholesale. Used by import and
    /// programmatic load; pushes a history entry and clears the dirty
    /// flag.
    pub fn set_current_view(&mut self, doc: Option<ViewDocument>) {
        match doc {
            Some(doc) => {
                debug!(view_id = %doc.id, "installing view");
                self.ids = IdGenerator::new(&doc.name);
                if self.history.is_empty() {
                    self.history.reset(&doc);
                } else {
                    self.history.commit(&doc);
                }
                self.selected = None;
                self.dirty = false;
                let view_id = doc.id.clone();
                self.current = Some(doc);
                self.subscribers
                    .notify(&BuilderEvent::ViewInstalled { view_id });
            }
            None => {
                self.current = None;
                self.selected = None;
                self.subscribers.notify(&BuilderEvent::ViewCleared);
            }
        }
    }

    /// Set or clear the selection. Does not touch history or dirty.
    pub fn select_node(&mut self, node_id: Option<&str>) {
        self.selected = node_id.map(|s| s.to_string());
        self.subscribers.notify(&BuilderEvent::SelectionChanged {
            node_id: self.selected.clone(),
        });
    }

    /// Build a node for a registry component with a fresh unique id.
    /// The kind comes from the registry category when known.
    pub fn instantiate(&mut self, name: &str) -> ComponentNode {
        let kind = self
            .registry
            .get(name)
            .map(|d| d.category)
            .unwrap_or_else(|| kind_for_name(name));

        let mut id = self.ids.next_id();
        if let Some(doc) = &self.current {
            while doc.root.contains(&id) {
                id = self.ids.next_id();
            }
        }
        ComponentNode::new(id, kind, name)
    }

    /// Append `node` to the parent's children. `parent_id` of None (or
    /// the root's id) targets the root. Schema defaults are seeded for
    /// props the node does not already carry.
    pub fn add_component(&mut self, mut node: ComponentNode, parent_id: Option<&str>) -> bool {
        let Some(doc) = self.current.as_mut() else {
            return false;
        };
        if doc.root.contains(&node.id) {
            debug!(node_id = %node.id, "rejecting add: id already in tree");
            return false;
        }

        for (prop, default) in self.registry.default_props(&node.name) {
            node.props.entry(prop).or_insert(default);
        }

        let node_id = node.id.clone();
        let parent = match parent_id {
            None => &mut doc.root,
            Some(id) if id == doc.root.id => &mut doc.root,
            Some(id) => match doc.root.find_node_mut(id) {
                Some(parent) => parent,
                None => return false,
            },
        };
        parent.children.push(node);

        debug!(node_id = %node_id, ?parent_id, "component added");
        self.commit_and_notify(BuilderEvent::ComponentAdded { node_id });
        true
    }

    /// Remove the node and its entire subtree. The root is never a
    /// valid target. Clears the selection if it pointed into the
    /// removed subtree.
    pub fn remove_component(&mut self, node_id: &str) -> bool {
        let Some(doc) = self.current.as_mut() else {
            return false;
        };
        if node_id == doc.root.id {
            return false;
        }
        let Some(removed) = doc.root.remove_descendant(node_id) else {
            return false;
        };

        if let Some(selected) = &self.selected {
            if removed.contains(selected) {
                self.selected = None;
            }
        }

        debug!(node_id, subtree_size = removed.node_count(), "component removed");
        self.commit_and_notify(BuilderEvent::ComponentRemoved {
            node_id: node_id.to_string(),
        });
        true
    }

    /// Shallow-merge `patch` into the node with `node_id`
    pub fn update_component(&mut self, node_id: &str, patch: NodePatch) -> bool {
        let Some(doc) = self.current.as_mut() else {
            return false;
        };
        let Some(node) = doc.root.find_node_mut(node_id) else {
            return false;
        };

        if let Some(name) = patch.name {
            node.name = name;
        }
        if let Some(kind) = patch.kind {
            node.kind = kind;
        }
        if let Some(props) = patch.props {
            node.props = props;
        }
        if let Some(class_name) = patch.class_name {
            node.class_name = Some(class_name);
        }
        if let Some(styles) = patch.styles {
            node.styles = styles;
        }
        if let Some(children) = patch.children {
            node.children = children;
        }

        debug!(node_id, "component updated");
        self.commit_and_notify(BuilderEvent::ComponentUpdated {
            node_id: node_id.to_string(),
        });
        true
    }

    /// Relocate a node (with its subtree intact) under a new parent.
    /// `index` is clamped; omitted means append. Moving a node into
    /// itself or one of its own descendants is rejected.
    pub fn move_component(
        &mut self,
        node_id: &str,
        new_parent_id: &str,
        index: Option<usize>,
    ) -> bool {
        let Some(doc) = self.current.as_mut() else {
            return false;
        };
        if node_id == doc.root.id {
            return false;
        }

        let Some(node) = doc.root.find_node(node_id) else {
            return false;
        };
        if node.contains(new_parent_id) {
            debug!(node_id, new_parent_id, "rejecting move into own subtree");
            return false;
        }
        if doc.root.find_node(new_parent_id).is_none() {
            return false;
        }

        let Some(detached) = doc.root.remove_descendant(node_id) else {
            return false;
        };
        let parent = doc
            .root
            .find_node_mut(new_parent_id)
            .expect("parent verified before detach");
        parent.insert_child(index.unwrap_or(usize::MAX), detached);

        debug!(node_id, new_parent_id, ?index, "component moved");
        self.commit_and_notify(BuilderEvent::ComponentMoved {
            node_id: node_id.to_string(),
        });
        true
    }

    /// Step back one history slot. False at the boundary.
    pub fn undo(&mut self) -> bool {
        let Some(doc) = self.history.undo() else {
            return false;
        };
        self.install_snapshot(doc);
        true
    }

    /// Step forward one history slot. False at the boundary.
    pub fn redo(&mut self) -> bool {
        let Some(doc) = self.history.redo() else {
            return false;
        };
        self.install_snapshot(doc);
        true
    }

    pub fn subscribe(&mut self, listener: impl Fn(&BuilderEvent) + 'static) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn install_snapshot(&mut self, doc: ViewDocument) {
        if let Some(selected) = &self.selected {
            if !doc.root.contains(selected) {
                self.selected = None;
            }
        }
        self.current = Some(doc);
        self.dirty = true;
        self.subscribers.notify(&BuilderEvent::HistoryMoved);
    }

    fn commit_and_notify(&mut self, event: BuilderEvent) {
        if let Some(doc) = self.current.as_mut() {
            doc.touch();
            self.history.commit(doc);
        }
        self.dirty = true;
        self.subscribers.notify(&event);
    }
}

impl std::fmt::Debug for BuilderEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderEngine")
            .field("current", &self.current.as_ref().map(|d| &d.id))
            .field("selected", &self.selected)
            .field("dirty", &self.dirty)
            .field("history", &self.history)
            .finish()
    }
}
