//! Navigable, read-only element trees.
//!
//! The sort-order crates are written exclusively against [`ElementNode`], so any
//! parsed document that can report names, child elements and parent elements can
//! be classified and reordered.

pub mod error;
pub mod node;
pub mod testing;
pub mod xml;

pub use error::TreeError;
pub use node::ElementNode;
pub use xml::{XmlDocument, XmlElement};
