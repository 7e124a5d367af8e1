//! Magento argument-tree notation
//!
//! UI components and layout blocks receive constructor data as
//! `<argument name="..." xsi:type="...">` trees whose nested entries are
//! `<item>` elements of the same shape. This module turns a typed argument
//! list into a declarative spec and feeds it through the assembler.

use crate::error::Result;
use crate::spec::Spec;
use crate::xml::{assign, Element};

/// Argument value; the variant decides the `xsi:type` attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Str(String),
    /// A string that additionally carries `translate="true"`.
    Translated(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Map(Vec<(String, ArgValue)>),
}

/// Named argument list, rendered in order.
pub type Args = Vec<(String, ArgValue)>;

/// Shorthand for building [`Args`] entries.
pub fn arg(name: impl Into<String>, value: ArgValue) -> (String, ArgValue) {
    (name.into(), value)
}

impl ArgValue {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn translated(value: impl Into<String>) -> Self {
        Self::Translated(value.into())
    }

    pub fn map(entries: Args) -> Self {
        Self::Map(entries)
    }

    fn xsi_type(&self) -> &'static str {
        match self {
            Self::Str(_) | Self::Translated(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "double",
            Self::Map(_) => "array",
        }
    }
}

/// Build the spec for a run of sibling argument nodes named `node_name`.
pub fn argument_spec(args: &Args, node_name: &str) -> Spec {
    let entries: Vec<Spec> = args
        .iter()
        .map(|(name, value)| entry_spec(name, value))
        .collect();
    Spec::new().child(node_name, entries)
}

fn entry_spec(name: &str, value: &ArgValue) -> Spec {
    let mut spec = Spec::new()
        .attr("name", name)
        .attr("xsi:type", value.xsi_type());
    match value {
        ArgValue::Str(text) => spec = spec.text(text.clone()),
        ArgValue::Translated(text) => spec = spec.attr("translate", "true").text(text.clone()),
        ArgValue::Bool(flag) => spec = spec.text(flag.to_string()),
        ArgValue::Int(number) => spec = spec.text(number.to_string()),
        ArgValue::Float(number) => spec = spec.text(number.to_string()),
        ArgValue::Map(entries) => {
            let items: Vec<Spec> = entries
                .iter()
                .map(|(item_name, item_value)| entry_spec(item_name, item_value))
                .collect();
            spec = spec.child("item", items);
        }
    }
    spec
}

/// Assign `args` under `node` as `<argument>` children (or `node_name`
/// children, for the `param` variants used by buttons and actions).
pub fn assign_arguments(node: &mut Element, args: &Args, node_name: &str) -> Result<()> {
    assign(node, &argument_spec(args, node_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::to_document;

    #[test]
    fn test_scalar_argument_types() -> Result<()> {
        let args = vec![
            arg("label", ArgValue::translated("Name")),
            arg("visible", ArgValue::Bool(false)),
            arg("sortOrder", ArgValue::Int(20)),
        ];
        let out = to_document(&argument_spec(&args, "argument"), "root")?;
        assert!(out.contains(
            "<argument name=\"label\" xsi:type=\"string\" translate=\"true\">Name</argument>"
        ));
        assert!(out.contains("<argument name=\"visible\" xsi:type=\"boolean\">false</argument>"));
        assert!(out.contains("<argument name=\"sortOrder\" xsi:type=\"integer\">20</argument>"));
        Ok(())
    }

    #[test]
    fn test_nested_map_uses_item_nodes() -> Result<()> {
        let args = vec![arg(
            "data",
            ArgValue::map(vec![arg(
                "config",
                ArgValue::map(vec![arg("source", ArgValue::str("data"))]),
            )]),
        )];
        let out = to_document(&argument_spec(&args, "argument"), "root")?;
        assert!(out.contains("<argument name=\"data\" xsi:type=\"array\">"));
        assert!(out.contains("<item name=\"config\" xsi:type=\"array\">"));
        assert!(out.contains("<item name=\"source\" xsi:type=\"string\">data</item>"));
        Ok(())
    }
}
