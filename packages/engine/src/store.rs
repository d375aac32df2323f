//! Persistence collaborator interface.
//!
//! The engine core depends only on this trait's shape. Real backends
//! (remote save/load-by-name services) live outside this workspace; an
//! in-memory implementation is provided for tests and embedders.

use viewforge_model::ViewDocument;

/// Summary record returned by listing and search
#[derive(Debug, Clone, PartialEq)]
pub struct SavedRecord {
    pub id: String,
    pub name: String,
    pub updated: String,
}

impl SavedRecord {
    fn of(doc: &ViewDocument) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            updated: doc.metadata.updated.clone(),
        }
    }
}

pub trait ViewStore {
    fn save_view(&mut self, doc: &ViewDocument) -> SavedRecord;
    fn load_view(&self, id: &str) -> Option<ViewDocument>;
    fn list_views(&self) -> Vec<SavedRecord>;
    fn delete_view(&mut self, id: &str) -> bool;
    fn search_views(&self, query: &str) -> Vec<SavedRecord>;
}

/// In-memory store, keyed by view id
#[derive(Debug, Default)]
pub struct InMemoryViewStore {
    views: Vec<ViewDocument>,
}

impl InMemoryViewStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewStore for InMemoryViewStore {
    fn save_view(&mut self, doc: &ViewDocument) -> SavedRecord {
        if let Some(existing) = self.views.iter_mut().find(|v| v.id == doc.id) {
            *existing = doc.clone();
        } else {
            self.views.push(doc.clone());
        }
        SavedRecord::of(doc)
    }

    fn load_view(&self, id: &str) -> Option<ViewDocument> {
        self.views.iter().find(|v| v.id == id).cloned()
    }

    fn list_views(&self) -> Vec<SavedRecord> {
        self.views.iter().map(SavedRecord::of).collect()
    }

    fn delete_view(&mut self, id: &str) -> bool {
        let before = self.views.len();
        self.views.retain(|v| v.id != id);
        self.views.len() != before
    }

    fn search_views(&self, query: &str) -> Vec<SavedRecord> {
        let query = query.to_lowercase();
        self.views
            .iter()
            .filter(|v| {
                v.name.to_lowercase().contains(&query)
                    || v.description.to_lowercase().contains(&query)
            })
            .map(SavedRecord::of)
            .collect()
    }
}
