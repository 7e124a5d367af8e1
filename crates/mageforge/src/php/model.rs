//! Structural model of one generated PHP file

use std::path::Path;

use crate::error::Result;
use crate::xml::writer::write_text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// One docblock tag, e.g. `@return string` or the bare `@api`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub content: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Some(content.into()),
        }
    }

    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocBlock {
    pub short: Option<String>,
    pub tags: Vec<Tag>,
}

impl DocBlock {
    pub fn short(text: impl Into<String>) -> Self {
        Self {
            short: Some(text.into()),
            tags: Vec::new(),
        }
    }

    /// The ubiquitous `@inheritDoc` block.
    pub fn inherit_doc() -> Self {
        Self {
            short: None,
            tags: vec![Tag::bare("inheritDoc")],
        }
    }

    #[must_use]
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub params: Vec<Param>,
    /// `None` renders a bodiless signature (interface method).
    pub body: Option<String>,
    pub doc_block: Option<DocBlock>,
}

impl Method {
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            is_static: false,
            params: Vec::new(),
            body: None,
            doc_block: None,
        }
    }

    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }

    pub fn protected(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Protected)
    }

    #[must_use]
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param::new(name));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn doc(mut self, doc_block: DocBlock) -> Self {
        self.doc_block = Some(doc_block);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    /// Rendered verbatim, so string values include their quotes.
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub default: Option<String>,
    pub doc_block: Option<DocBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSpec {
    pub name: String,
    /// Short name; the corresponding import goes in [`PhpFile::uses`].
    pub extends: Option<String>,
    pub implements: Vec<String>,
    pub constants: Vec<Constant>,
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
}

impl ClassSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    #[must_use]
    pub fn implement(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceSpec {
    pub name: String,
    pub extends: Vec<String>,
    pub constants: Vec<Constant>,
    pub methods: Vec<Method>,
}

impl InterfaceSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhpItem {
    Class(ClassSpec),
    Interface(InterfaceSpec),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UseStatement {
    pub path: String,
    pub alias: Option<String>,
}

impl UseStatement {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }
}

/// One PHP file: optional file docblock, namespace, imports, and either a
/// type declaration or a bare statement body (registration files).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhpFile {
    pub doc_block: Option<DocBlock>,
    pub namespace: Option<String>,
    pub uses: Vec<UseStatement>,
    pub item: Option<PhpItem>,
    pub body: Option<String>,
}

impl PhpFile {
    pub fn class(namespace: impl Into<String>, class: ClassSpec) -> Self {
        Self {
            namespace: Some(namespace.into()),
            item: Some(PhpItem::Class(class)),
            ..Self::default()
        }
    }

    pub fn interface(namespace: impl Into<String>, interface: InterfaceSpec) -> Self {
        Self {
            namespace: Some(namespace.into()),
            item: Some(PhpItem::Interface(interface)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn doc(mut self, doc_block: DocBlock) -> Self {
        self.doc_block = Some(doc_block);
        self
    }

    #[must_use]
    pub fn import(mut self, use_statement: UseStatement) -> Self {
        self.uses.push(use_statement);
        self
    }

    pub fn render(&self) -> String {
        crate::php::render::render_file(self)
    }

    /// Write the rendered source under the idempotent write-if-absent
    /// policy. Returns whether the file was written.
    pub fn write(&self, path: &Path, overwrite: bool) -> Result<bool> {
        write_text(path, &self.render(), overwrite)
    }
}
