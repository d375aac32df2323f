//! # Viewforge Engine
//!
//! Core document editing engine for viewforge.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ import: text → ViewDocument                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ engine: document lifecycle + mutations      │
//! │  - add/remove/update/move components        │
//! │  - bounded snapshot history (undo/redo)     │
//! │  - synchronous subscriber notification      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ export: ViewDocument → HTML / PHP / JSON    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The engine is single-threaded and synchronous: each mutation runs
//! tree edit → history commit → subscriber fan-out before returning.

mod builder;
mod history;
mod store;
mod subscribers;

pub use builder::{BuilderEngine, NodePatch};
pub use history::{History, DEFAULT_HISTORY_CAP};
pub use store::{InMemoryViewStore, SavedRecord, ViewStore};
pub use subscribers::{BuilderEvent, SubscriberId, SubscriberSet};

// Re-export the model for convenience
pub use viewforge_model::{ComponentKind, ComponentNode, ViewDocument};
