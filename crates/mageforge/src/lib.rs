//! mageforge - Magento 2 module scaffolding library
//!
//! Declarative specs are assembled into XML configuration documents, and a
//! small PHP emitter produces the class files a module skeleton needs. The
//! scaffold layer combines both into whole-module operations.
//!
//! # Quick Start
//!
//! ```
//! use mageforge::{to_document, Spec};
//! # fn main() -> mageforge::Result<()> {
//! let spec = Spec::new().child(
//!     "router",
//!     Spec::new().attr("id", "admin"),
//! );
//! let xml = to_document(&spec, "config")?;
//! assert_eq!(
//!     xml,
//!     "<?xml version=\"1.0\"?>\n<config><router id=\"admin\"/></config>\n"
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod spec;
pub use spec::{Spec, SpecValue, ATTR_SIGIL};

pub mod xml;
pub use xml::{assign, to_document, write_document};
pub use xml::{Content, Document, Element, NodeId};

pub mod config;
pub use config::{
    arg, ArgValue, Args, LayoutBuilder, UiFormBuilder, UiListingBuilder, XmlConfig,
};

pub mod php;
pub use php::{ClassSpec, DocBlock, InterfaceSpec, Method, PhpFile, Tag, UseStatement};

pub mod scaffold;
pub use scaffold::{
    create_admin_ui, create_api, create_model, create_module, AdminUiOptions, FieldName,
    ModuleName, ModuleOptions, PackageName, TypePath,
};
