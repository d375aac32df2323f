pub mod node;
pub mod view;

pub use node::*;
pub use view::*;
