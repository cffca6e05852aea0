//! Markdown rendering into inert structural nodes.
//!
//! [`render`] never fails: anything the renderer does not model is kept as
//! literal text. [`flatten`] recovers the literal text of a node tree.

pub mod markdown;
pub mod node;

pub use markdown::render;
pub use node::flatten;
