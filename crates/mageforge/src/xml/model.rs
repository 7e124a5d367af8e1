//! XML data model and serializer

use indexmap::IndexMap;

/// XML document owning a single root element
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            root: Element::new(root_tag),
        }
    }

    /// Serialize with the XML declaration. Attribute and child order is the
    /// insertion order, so output is deterministic for a given tree.
    pub fn serialize(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\"?>\n");
        self.root.write_into(&mut out);
        out.push('\n');
        out
    }
}

/// XML element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Content::Text(text.into()));
    }

    /// Append a child element, returning its index among `children`.
    pub fn push_element(&mut self, child: Element) -> usize {
        self.children.push(Content::Element(child));
        self.children.len() - 1
    }

    /// Resolve a [`NodeId`] path rooted at this element.
    pub fn descendant_mut(&mut self, id: &NodeId) -> Option<&mut Element> {
        let mut current = self;
        for &index in &id.0 {
            current = match current.children.get_mut(index) {
                Some(Content::Element(child)) => child,
                _ => return None,
            };
        }
        Some(current)
    }

    pub fn descendant(&self, id: &NodeId) -> Option<&Element> {
        let mut current = self;
        for &index in &id.0 {
            current = match current.children.get(index) {
                Some(Content::Element(child)) => child,
                _ => return None,
            };
        }
        Some(current)
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            match child {
                Content::Element(element) => element.write_into(out),
                Content::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// Path of child indices addressing one element inside a document.
///
/// The tree is append-only during assembly, so an id stays valid for as long
/// as the document it was created from is alive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeId(Vec<usize>);

impl NodeId {
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn join(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }
}

pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
