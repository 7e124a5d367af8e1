//! Page layout builder
//!
//! Seeds a `<page>` document against the framework layout schema with a
//! `<body>` child, and exposes the mutators layout handles need. Attribute
//! tables per node kind follow the layout XSD.

use std::path::Path;

use crate::config::arguments::{assign_arguments, Args};
use crate::config::schema::{assign_attributes, AttrKind, AttrSchema, AttrValue};
use crate::config::XmlConfig;
use crate::error::Result;
use crate::xml::{Element, NodeId};

const LAYOUT_SCHEMA: &str = "urn:magento:framework:View/Layout/etc/page_configuration.xsd";

const BLOCK_ATTRS: AttrSchema = AttrSchema::new(&[
    ("after", AttrKind::Str),
    ("before", AttrKind::Str),
    ("as", AttrKind::Str),
    ("output", AttrKind::Bool),
    ("group", AttrKind::Str),
    ("ttl", AttrKind::Int),
    ("acl", AttrKind::Str),
    ("aclResource", AttrKind::Str),
    ("cacheable", AttrKind::Bool),
    ("ifconfig", AttrKind::Str),
    ("template", AttrKind::Str),
]);

const CONTAINER_ATTRS: AttrSchema = AttrSchema::new(&[
    ("after", AttrKind::Str),
    ("before", AttrKind::Str),
    ("as", AttrKind::Str),
    ("output", AttrKind::Bool),
    ("htmlClass", AttrKind::Str),
    ("htmlId", AttrKind::Str),
    ("htmlTag", AttrKind::Str),
    ("label", AttrKind::Str),
]);

const UI_COMPONENT_ATTRS: AttrSchema = AttrSchema::new(&[
    ("after", AttrKind::Str),
    ("before", AttrKind::Str),
    ("as", AttrKind::Str),
    ("output", AttrKind::Bool),
    ("group", AttrKind::Str),
    ("ttl", AttrKind::Int),
    ("aclResource", AttrKind::Str),
    ("cacheable", AttrKind::Bool),
    ("ifconfig", AttrKind::Str),
    ("component", AttrKind::Str),
]);

const REFERENCE_BLOCK_ATTRS: AttrSchema = AttrSchema::new(&[
    ("display", AttrKind::Bool),
    ("remove", AttrKind::Bool),
    ("class", AttrKind::Str),
    ("template", AttrKind::Str),
]);

const REFERENCE_CONTAINER_ATTRS: AttrSchema = AttrSchema::new(&[
    ("display", AttrKind::Bool),
    ("remove", AttrKind::Bool),
    ("htmlClass", AttrKind::Str),
    ("htmlId", AttrKind::Str),
    ("htmlTag", AttrKind::Str),
    ("label", AttrKind::Str),
]);

const MOVE_ATTRS: AttrSchema = AttrSchema::new(&[
    ("after", AttrKind::Str),
    ("before", AttrKind::Str),
    ("as", AttrKind::Str),
]);

/// `<action>` entry under a block.
#[derive(Clone, Debug, Default)]
pub struct Action {
    pub method: String,
    pub ifconfig: Option<String>,
    pub arguments: Args,
}

/// Builder for `view/<area>/layout/*.xml` documents.
#[derive(Clone, Debug)]
pub struct LayoutBuilder {
    config: XmlConfig,
    body: NodeId,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        let mut config = XmlConfig::new("page", LAYOUT_SCHEMA);
        let index = config.root_mut().push_element(Element::new("body"));
        Self {
            config,
            body: NodeId::root().join(index),
        }
    }

    /// Id of the `<body>` element, the usual parent for references.
    pub fn body(&self) -> NodeId {
        self.body.clone()
    }

    pub fn set_page_layout(&mut self, layout: &str) {
        self.config.root_mut().set_attribute("layout", layout);
    }

    pub fn add_update(&mut self, handle: &str) {
        let mut update = Element::new("update");
        update.set_attribute("handle", handle);
        self.config.root_mut().push_element(update);
    }

    pub fn add_block(
        &mut self,
        parent: &NodeId,
        class: &str,
        name: &str,
        attributes: &[(&str, AttrValue)],
        arguments: &Args,
        actions: &[Action],
    ) -> Result<NodeId> {
        let mut block = Element::new("block");
        block.set_attribute("class", class);
        block.set_attribute("name", name);
        assign_attributes(&mut block, attributes, &BLOCK_ATTRS)?;
        if !arguments.is_empty() {
            assign_arguments(&mut block, arguments, "argument")?;
        }
        for action in actions {
            let mut node = Element::new("action");
            node.set_attribute("method", &action.method);
            if let Some(ifconfig) = &action.ifconfig {
                node.set_attribute("ifconfig", ifconfig);
            }
            if !action.arguments.is_empty() {
                assign_arguments(&mut node, &action.arguments, "argument")?;
            }
            block.push_element(node);
        }
        self.config.push_child(parent, block)
    }

    pub fn add_container(
        &mut self,
        parent: &NodeId,
        name: &str,
        attributes: &[(&str, AttrValue)],
    ) -> Result<NodeId> {
        let mut container = Element::new("container");
        container.set_attribute("name", name);
        assign_attributes(&mut container, attributes, &CONTAINER_ATTRS)?;
        self.config.push_child(parent, container)
    }

    pub fn add_ui_component(
        &mut self,
        parent: &NodeId,
        name: &str,
        attributes: &[(&str, AttrValue)],
    ) -> Result<NodeId> {
        let mut component = Element::new("uiComponent");
        component.set_attribute("name", name);
        assign_attributes(&mut component, attributes, &UI_COMPONENT_ATTRS)?;
        self.config.push_child(parent, component)
    }

    pub fn add_body_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        let mut attribute = Element::new("attribute");
        attribute.set_attribute("name", name);
        attribute.set_attribute("value", value);
        self.config.push_child(&self.body.clone(), attribute)?;
        Ok(())
    }

    pub fn reference_block(
        &mut self,
        name: &str,
        attributes: &[(&str, AttrValue)],
    ) -> Result<NodeId> {
        let mut reference = Element::new("referenceBlock");
        reference.set_attribute("name", name);
        assign_attributes(&mut reference, attributes, &REFERENCE_BLOCK_ATTRS)?;
        self.config.push_child(&self.body.clone(), reference)
    }

    pub fn reference_container(
        &mut self,
        name: &str,
        attributes: &[(&str, AttrValue)],
    ) -> Result<NodeId> {
        let mut reference = Element::new("referenceContainer");
        reference.set_attribute("name", name);
        assign_attributes(&mut reference, attributes, &REFERENCE_CONTAINER_ATTRS)?;
        self.config.push_child(&self.body.clone(), reference)
    }

    pub fn move_element(
        &mut self,
        element: &str,
        destination: &str,
        attributes: &[(&str, AttrValue)],
    ) -> Result<NodeId> {
        let mut node = Element::new("move");
        node.set_attribute("element", element);
        node.set_attribute("destination", destination);
        assign_attributes(&mut node, attributes, &MOVE_ATTRS)?;
        self.config.push_child(&self.body.clone(), node)
    }

    pub fn generate(&self) -> String {
        self.config.generate()
    }

    pub fn write(&self, path: &Path, overwrite: bool) -> Result<bool> {
        self.config.write(path, overwrite)
    }
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::arguments::{arg, ArgValue};

    #[test]
    fn test_reference_container_with_component() -> Result<()> {
        let mut layout = LayoutBuilder::new();
        let container = layout.reference_container("content", &[])?;
        layout.add_ui_component(&container, "sales_order_listing", &[])?;

        let out = layout.generate();
        assert!(out.contains("<referenceContainer name=\"content\">"));
        assert!(out.contains("<uiComponent name=\"sales_order_listing\"/>"));
        Ok(())
    }

    #[test]
    fn test_block_with_action_and_arguments() -> Result<()> {
        let mut layout = LayoutBuilder::new();
        let body = layout.body();
        layout.add_block(
            &body,
            "Acme\\Sales\\Block\\Info",
            "sales.info",
            &[("cacheable", AttrValue::Bool(false))],
            &vec![arg("title", ArgValue::translated("Sales"))],
            &[Action {
                method: "setTemplate".to_string(),
                ifconfig: None,
                arguments: vec![arg("template", ArgValue::str("Acme_Sales::info.phtml"))],
            }],
        )?;

        let out = layout.generate();
        assert!(out.contains("cacheable=\"false\""));
        assert!(out.contains("<action method=\"setTemplate\">"));
        Ok(())
    }

    #[test]
    fn test_unknown_block_attribute_rejected() {
        let mut layout = LayoutBuilder::new();
        let body = layout.body();
        let err = layout.add_block(
            &body,
            "Acme\\Sales\\Block\\Info",
            "sales.info",
            &[("nope", AttrValue::str("x"))],
            &Vec::new(),
            &[],
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_update_handle_precedes_body() -> Result<()> {
        let mut layout = LayoutBuilder::new();
        layout.add_update("styles");
        let out = layout.generate();
        assert!(out.contains("<update handle=\"styles\"/>"));
        Ok(())
    }
}
