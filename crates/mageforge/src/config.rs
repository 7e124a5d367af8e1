//! Framework XML configuration layer
//!
//! [`XmlConfig`] wraps a document with the schema-location boilerplate every
//! Magento configuration file carries, and hosts the caller-side policies
//! that are not intrinsic to node assembly: allowed-attribute schemas and the
//! `<argument>`/`<item>` notation. The concrete builders seed complete
//! framework-valid documents for page layouts and UI components.

pub mod arguments;
pub mod layout;
pub mod schema;
pub mod ui_form;
pub mod ui_listing;

use std::path::Path;

pub use arguments::{arg, assign_arguments, ArgValue, Args};
pub use layout::{Action, LayoutBuilder};
pub use schema::{assign_attributes, AttrKind, AttrSchema, AttrValue};
pub use ui_form::UiFormBuilder;
pub use ui_listing::UiListingBuilder;

use crate::error::{Error, Result};
use crate::spec::Spec;
use crate::xml::{assign, write_document, Document, Element, NodeId};

/// XML schema-instance namespace used by `xsi:` attributes.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// An XML configuration document with schema-location boilerplate.
#[derive(Clone, Debug)]
pub struct XmlConfig {
    document: Document,
}

impl XmlConfig {
    pub fn new(root_tag: &str, schema_location: &str) -> Self {
        let mut document = Document::new(root_tag);
        document.root.set_attribute("xmlns:xsi", XSI_NAMESPACE);
        document
            .root
            .set_attribute("xsi:noNamespaceSchemaLocation", schema_location);
        Self { document }
    }

    pub fn root(&self) -> &Element {
        &self.document.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.document.root
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Resolve a node id to its element.
    pub fn node_mut(&mut self, id: &NodeId) -> Result<&mut Element> {
        self.document
            .root
            .descendant_mut(id)
            .ok_or_else(|| Error::invalid_spec("node id does not resolve to an element"))
    }

    /// Append a child element under `parent` and return its id.
    pub fn push_child(&mut self, parent: &NodeId, element: Element) -> Result<NodeId> {
        let node = self.node_mut(parent)?;
        let index = node.push_element(element);
        Ok(parent.join(index))
    }

    /// Populate the element at `id` from a declarative spec.
    pub fn assign(&mut self, id: &NodeId, spec: &Spec) -> Result<()> {
        let node = self.node_mut(id)?;
        assign(node, spec)
    }

    pub fn generate(&self) -> String {
        self.document.serialize()
    }

    pub fn write(&self, path: &Path, overwrite: bool) -> Result<bool> {
        write_document(&self.document, path, overwrite)
    }
}
