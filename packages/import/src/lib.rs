//! # Viewforge Import
//!
//! Converts structured data, markup documents, or templated documents
//! into view trees. Every entry point returns a [`ParsedView`] and
//! never fails outright: on error the result carries `parsed: false`,
//! the messages, and a minimal empty document as a safe fallback.

pub mod error;
mod markup;
mod parsed;
mod structured;
mod templated;
mod tokenizer;

pub use error::{ParseError, ParseResult};
pub use markup::{parse_inline_styles, parse_markup};
pub use parsed::{ParsedView, SourceFormat};
pub use structured::parse_structured;
pub use templated::parse_templated;
