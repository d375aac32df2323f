pub mod filesystem;
pub mod id_generator;
pub mod paths;
pub mod text;

pub use filesystem::*;
pub use id_generator::*;
pub use paths::*;
pub use text::*;
