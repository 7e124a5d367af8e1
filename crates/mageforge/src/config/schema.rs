//! Allowed-attribute schemas
//!
//! Each layout/listing node kind declares which attributes it accepts and of
//! what kind. This check lives in the config layer, not the assembler: it is
//! a policy of the generators, applied before attributes reach the tree.

use std::fmt;

use crate::error::{Error, Result};
use crate::xml::Element;

/// Kind of value an attribute accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrKind {
    Str,
    Bool,
    Int,
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
        }
    }
}

/// Attribute value supplied by a caller. `None` entries are skipped.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    None,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl AttrValue {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    fn kind(&self) -> Option<AttrKind> {
        match self {
            Self::None => None,
            Self::Bool(_) => Some(AttrKind::Bool),
            Self::Int(_) => Some(AttrKind::Int),
            Self::Str(_) => Some(AttrKind::Str),
        }
    }

    fn text(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Str(s) => Some(s.clone()),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::None,
        }
    }
}

/// Table of attributes one node kind accepts.
#[derive(Clone, Copy, Debug)]
pub struct AttrSchema {
    allowed: &'static [(&'static str, AttrKind)],
}

impl AttrSchema {
    pub const fn new(allowed: &'static [(&'static str, AttrKind)]) -> Self {
        Self { allowed }
    }

    pub fn kind_of(&self, name: &str) -> Option<AttrKind> {
        self.allowed
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, kind)| *kind)
    }
}

/// Assign `attributes` onto `node`, each checked against `schema`.
///
/// `None` values are skipped without a schema lookup, matching the
/// suppression rule of the assembler. Undeclared names and kind mismatches
/// surface as [`Error::SchemaViolation`] naming the offending attribute.
pub fn assign_attributes(
    node: &mut Element,
    attributes: &[(&str, AttrValue)],
    schema: &AttrSchema,
) -> Result<()> {
    for (name, value) in attributes {
        let Some(kind) = value.kind() else {
            continue;
        };
        match schema.kind_of(name) {
            None => {
                return Err(Error::schema_violation(
                    *name,
                    "not an allowed attribute on this element",
                ));
            }
            Some(expected) if expected != kind => {
                return Err(Error::schema_violation(
                    *name,
                    format!("expected a {expected} value, got {kind}"),
                ));
            }
            Some(_) => {
                if let Some(text) = value.text() {
                    node.set_attribute(*name, text);
                }
            }
        }
    }
    Ok(())
}
