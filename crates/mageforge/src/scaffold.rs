//! Scaffolding operations
//!
//! Each operation takes explicit inputs (module name, target directory,
//! parameters), composes the XML config and PHP emitter layers, and writes
//! files under the module root with the write-if-absent policy. The paths
//! actually written are returned so callers can report them.

pub mod admin_ui;
pub mod api;
pub mod model;
pub mod module;
pub mod name;

pub use admin_ui::{create_admin_ui, AdminUiOptions};
pub use api::create_api;
pub use model::create_model;
pub use module::{create_module, ModuleOptions};
pub use name::{FieldName, ModuleName, PackageName, TypePath};

/// Namespace of the companion base package whose abstract admin actions the
/// generated controllers extend.
pub(crate) const BASE_CONTROLLER_NS: &str = "Mageforge\\Base\\Controller\\Adminhtml";
