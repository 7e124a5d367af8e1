//! PHP source emitter
//!
//! Consumes a structural description of one PHP file (docblock, namespace,
//! imports, a class or interface, or a bare statement body) and renders
//! deterministic source text. Rendering is pure; persistence goes through
//! the same idempotent write policy as the XML side.

pub mod model;
pub mod render;

pub use model::{
    ClassSpec, Constant, DocBlock, InterfaceSpec, Method, Param, PhpFile, PhpItem, Property, Tag,
    UseStatement, Visibility,
};
