//! Markup tree model and the node assembler
//!
//! The assembler converts a [`crate::spec::Spec`] into a write-once element
//! tree which then serializes to an XML document with a `<?xml version="1.0"?>`
//! declaration.

pub mod assembler;
pub mod model;
pub mod writer;

pub use assembler::{assign, to_document};
pub use model::{Content, Document, Element, NodeId};
pub use writer::write_document;
