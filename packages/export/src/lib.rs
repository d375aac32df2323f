//! # Viewforge Export
//!
//! Converts view trees into emittable text: standalone markup (HTML),
//! templated documents (PHP) and the canonical JSON serialization,
//! plus companion stylesheet/script assets and file delivery through
//! an injected writer.

mod assets;
mod context;
mod manager;
mod markup;
mod templated;

pub use assets::{page_script, stylesheet};
pub use context::escape_markup;
pub use manager::{ExportError, ExportFormat, ExportManager, ExportPayload};
pub use markup::{generate_markup, serialize_styles, GeneratedPage};
pub use templated::generate_templated;
