//! Node assembler: recursive spec-to-markup population
//!
//! One pass, top-down, in insertion order. The only failure mode is a
//! nested value under an attribute key; well-formed specs never fail.

use crate::error::{Error, Result};
use crate::spec::{Spec, SpecValue, ATTR_SIGIL};
use crate::xml::model::{Document, Element};

/// Populate `node` from `spec`.
///
/// Attribute keys assign attributes on `node` itself (a `None` value omits
/// the attribute entirely), scalar values become leaf children, `Tree`
/// values one nested child, and `List` values one sibling child per entry,
/// all named by the key.
pub fn assign(node: &mut Element, spec: &Spec) -> Result<()> {
    for (key, value) in spec.entries() {
        match key.strip_prefix(ATTR_SIGIL) {
            Some(attr_name) => assign_attribute(node, attr_name, value)?,
            None => assign_child(node, key, value)?,
        }
    }
    Ok(())
}

fn assign_attribute(node: &mut Element, name: &str, value: &SpecValue) -> Result<()> {
    match value {
        SpecValue::None => Ok(()),
        SpecValue::Tree(_) | SpecValue::List(_) => Err(Error::invalid_spec(format!(
            "attribute `{name}` must carry a scalar or absent value"
        ))),
        scalar => {
            if let Some(text) = scalar.scalar_text() {
                node.set_attribute(name, text);
            }
            Ok(())
        }
    }
}

fn assign_child(node: &mut Element, name: &str, value: &SpecValue) -> Result<()> {
    match value {
        SpecValue::Tree(subtree) => {
            let mut child = new_child(name, subtree.node_text());
            assign(&mut child, subtree)?;
            node.push_element(child);
            Ok(())
        }
        SpecValue::List(entries) => {
            for entry in entries {
                let mut child = new_child(name, entry.node_text());
                assign(&mut child, entry)?;
                node.push_element(child);
            }
            Ok(())
        }
        leaf => {
            let mut child = Element::new(name);
            if let Some(text) = leaf.scalar_text() {
                if !text.is_empty() {
                    child.push_text(text);
                }
            }
            node.push_element(child);
            Ok(())
        }
    }
}

fn new_child(name: &str, text: Option<&str>) -> Element {
    let mut child = Element::new(name);
    if let Some(text) = text {
        if !text.is_empty() {
            child.push_text(text);
        }
    }
    child
}

/// Build a fresh single-element document named `root_tag`, populate it from
/// `spec` and return the serialized text. Pure function of its inputs.
pub fn to_document(spec: &Spec, root_tag: &str) -> Result<String> {
    let mut document = Document::new(root_tag);
    assign(&mut document.root, spec)?;
    Ok(document.serialize())
}
