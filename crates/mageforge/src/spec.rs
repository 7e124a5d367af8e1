//! Declarative spec model
//!
//! A [`Spec`] is an insertion-ordered mapping describing the XML structure to
//! build: keys carrying the `@` sigil become attributes, plain keys become
//! child elements. Whether a child repeats is not inferred from the value's
//! shape; [`SpecValue::Tree`] always means one nested child and
//! [`SpecValue::List`] always means a run of same-named siblings.

use indexmap::IndexMap;

/// Leading marker identifying a spec key as an attribute assignment.
pub const ATTR_SIGIL: char = '@';

/// Value attached to one spec key.
#[derive(Clone, Debug, PartialEq)]
pub enum SpecValue {
    /// Absent value: suppresses an attribute, or yields an empty element.
    None,
    Bool(bool),
    Int(i64),
    Str(String),
    /// Exactly one nested child element.
    Tree(Spec),
    /// One sibling child element per entry, all sharing the key as tag name.
    List(Vec<Spec>),
}

impl SpecValue {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Bool(_) | Self::Int(_) | Self::Str(_))
    }

    /// Textual form of a scalar value. Booleans render as the literal
    /// `true`/`false` strings. `None`, `Tree` and `List` have no text.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Str(s) => Some(s.clone()),
            Self::None | Self::Tree(_) | Self::List(_) => None,
        }
    }
}

impl From<bool> for SpecValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SpecValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SpecValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Spec> for SpecValue {
    fn from(value: Spec) -> Self {
        Self::Tree(value)
    }
}

impl From<Vec<Spec>> for SpecValue {
    fn from(value: Vec<Spec>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<SpecValue>> From<Option<T>> for SpecValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::None,
        }
    }
}

/// Ordered mapping from key to [`SpecValue`], plus the node's own text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spec {
    text: Option<String>,
    entries: IndexMap<String, SpecValue>,
}

impl Spec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text content of the element this spec describes. Consumed
    /// when the element is created, before any child elements.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add an attribute entry (the key gets the `@` sigil).
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<SpecValue>) -> Self {
        self.entries.insert(format!("{ATTR_SIGIL}{name}"), value.into());
        self
    }

    /// Add a child element entry.
    #[must_use]
    pub fn child(mut self, name: &str, value: impl Into<SpecValue>) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Insert an entry under a raw key; an `@`-prefixed key denotes an
    /// attribute. Later inserts under the same key replace earlier ones
    /// without disturbing their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SpecValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &SpecValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn node_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_insertion_order() {
        let spec = Spec::new()
            .attr("id", "x")
            .child("zebra", "z")
            .child("apple", "a");
        let keys: Vec<&str> = spec.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["@id", "zebra", "apple"]);
    }

    #[test]
    fn test_bool_scalar_text() {
        assert_eq!(SpecValue::Bool(true).scalar_text().as_deref(), Some("true"));
        assert_eq!(
            SpecValue::Bool(false).scalar_text().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_none_has_no_text() {
        assert_eq!(SpecValue::None.scalar_text(), None);
        assert_eq!(SpecValue::from(None::<&str>), SpecValue::None);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut spec = Spec::new().child("first", "1").child("second", "2");
        spec.insert("first", "updated");
        let keys: Vec<&str> = spec.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["first", "second"]);
    }
}
