//! PSR-12-ish rendering of the PHP file model
//!
//! Braces go on the next line for types and methods, 4-space indentation,
//! one blank line between members, single trailing newline.

use crate::php::model::{
    ClassSpec, Constant, DocBlock, InterfaceSpec, Method, PhpFile, PhpItem, Property,
};

const INDENT: &str = "    ";

pub(crate) fn render_file(file: &PhpFile) -> String {
    let mut out = String::from("<?php\n");

    if let Some(doc) = &file.doc_block {
        render_doc_block(&mut out, doc, 0);
    }

    if let Some(namespace) = &file.namespace {
        out.push('\n');
        out.push_str(&format!("namespace {namespace};\n"));
    }

    if !file.uses.is_empty() {
        out.push('\n');
        for use_statement in &file.uses {
            match &use_statement.alias {
                Some(alias) => out.push_str(&format!("use {} as {alias};\n", use_statement.path)),
                None => out.push_str(&format!("use {};\n", use_statement.path)),
            }
        }
    }

    match &file.item {
        Some(PhpItem::Class(class)) => {
            out.push('\n');
            render_class(&mut out, class);
        }
        Some(PhpItem::Interface(interface)) => {
            out.push('\n');
            render_interface(&mut out, interface);
        }
        None => {}
    }

    if let Some(body) = &file.body {
        out.push('\n');
        out.push_str(body.trim_end());
        out.push('\n');
    }

    out
}

fn render_class(out: &mut String, class: &ClassSpec) {
    out.push_str(&format!("class {}", class.name));
    if let Some(parent) = &class.extends {
        out.push_str(&format!(" extends {parent}"));
    }
    if !class.implements.is_empty() {
        out.push_str(&format!(" implements {}", class.implements.join(", ")));
    }
    out.push_str("\n{\n");

    let mut first = true;
    for constant in &class.constants {
        separate(out, &mut first);
        render_constant(out, constant);
    }
    for property in &class.properties {
        separate(out, &mut first);
        render_property(out, property);
    }
    for method in &class.methods {
        separate(out, &mut first);
        render_method(out, method, false);
    }

    out.push_str("}\n");
}

fn render_interface(out: &mut String, interface: &InterfaceSpec) {
    out.push_str(&format!("interface {}", interface.name));
    if !interface.extends.is_empty() {
        out.push_str(&format!(" extends {}", interface.extends.join(", ")));
    }
    out.push_str("\n{\n");

    let mut first = true;
    for constant in &interface.constants {
        separate(out, &mut first);
        render_constant(out, constant);
    }
    for method in &interface.methods {
        separate(out, &mut first);
        render_method(out, method, true);
    }

    out.push_str("}\n");
}

fn separate(out: &mut String, first: &mut bool) {
    if !*first {
        out.push('\n');
    }
    *first = false;
}

fn render_constant(out: &mut String, constant: &Constant) {
    out.push_str(&format!(
        "{INDENT}const {} = {};\n",
        constant.name, constant.value
    ));
}

fn render_property(out: &mut String, property: &Property) {
    if let Some(doc) = &property.doc_block {
        render_doc_block(out, doc, 1);
    }
    out.push_str(INDENT);
    out.push_str(property.visibility.as_str());
    if property.is_static {
        out.push_str(" static");
    }
    out.push_str(&format!(" ${}", property.name));
    if let Some(default) = &property.default {
        out.push_str(&format!(" = {default}"));
    }
    out.push_str(";\n");
}

fn render_method(out: &mut String, method: &Method, signature_only: bool) {
    if let Some(doc) = &method.doc_block {
        render_doc_block(out, doc, 1);
    }

    out.push_str(INDENT);
    out.push_str(method.visibility.as_str());
    if method.is_static {
        out.push_str(" static");
    }
    out.push_str(&format!(" function {}(", method.name));
    let params: Vec<String> = method
        .params
        .iter()
        .map(|param| match &param.default {
            Some(default) => format!("${} = {default}", param.name),
            None => format!("${}", param.name),
        })
        .collect();
    out.push_str(&params.join(", "));
    out.push(')');

    let body = match (&method.body, signature_only) {
        (Some(body), false) => body,
        _ => {
            out.push_str(";\n");
            return;
        }
    };

    out.push('\n');
    out.push_str(&format!("{INDENT}{{\n"));
    for line in body.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("{INDENT}{INDENT}{line}\n"));
        }
    }
    out.push_str(&format!("{INDENT}}}\n"));
}

fn render_doc_block(out: &mut String, doc: &DocBlock, level: usize) {
    let pad = INDENT.repeat(level);
    out.push_str(&format!("{pad}/**\n"));
    if let Some(short) = &doc.short {
        for line in short.lines() {
            out.push_str(&format!("{pad} * {line}\n"));
        }
        if !doc.tags.is_empty() {
            out.push_str(&format!("{pad} *\n"));
        }
    }
    for tag in &doc.tags {
        match &tag.content {
            Some(content) => out.push_str(&format!("{pad} * @{} {content}\n", tag.name)),
            None => out.push_str(&format!("{pad} * @{}\n", tag.name)),
        }
    }
    out.push_str(&format!("{pad} */\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::php::model::{Tag, UseStatement};

    #[test]
    fn test_render_class_with_inherited_construct() {
        let file = PhpFile::class(
            "Acme\\Sales\\Model",
            ClassSpec::new("Order").extends("AbstractModel").method(
                Method::protected("_construct")
                    .body("$this->_init(ResourceModel::class);")
                    .doc(DocBlock::inherit_doc()),
            ),
        )
        .import(UseStatement::new("Magento\\Framework\\Model\\AbstractModel"))
        .import(UseStatement::aliased(
            "Acme\\Sales\\Model\\ResourceModel\\Order",
            "ResourceModel",
        ));

        let expected = "<?php\n\n\
            namespace Acme\\Sales\\Model;\n\n\
            use Magento\\Framework\\Model\\AbstractModel;\n\
            use Acme\\Sales\\Model\\ResourceModel\\Order as ResourceModel;\n\n\
            class Order extends AbstractModel\n\
            {\n    \
                /**\n     \
                 * @inheritDoc\n     \
                 */\n    \
                protected function _construct()\n    \
                {\n        \
                    $this->_init(ResourceModel::class);\n    \
                }\n\
            }\n";
        assert_eq!(file.render(), expected);
    }

    #[test]
    fn test_render_interface_signatures() {
        let file = PhpFile::interface(
            "Acme\\Sales\\Api\\Data",
            InterfaceSpec::new("OrderInterface").method(
                Method::public("getName").doc(
                    DocBlock::short("Get name").tag(Tag::new("return", "string")),
                ),
            ),
        )
        .doc(DocBlock::default().tag(Tag::bare("api")));

        let out = file.render();
        assert!(out.starts_with("<?php\n/**\n * @api\n */\n"));
        assert!(out.contains("interface OrderInterface\n{\n"));
        assert!(out.contains("     * Get name\n     *\n     * @return string\n"));
        assert!(out.contains("    public function getName();\n"));
    }

    #[test]
    fn test_render_bare_body_file() {
        let file = PhpFile {
            doc_block: Some(DocBlock::short(
                "Copyright (c) Acme. All rights reserved.\nSee COPYING.txt for license details.",
            )),
            uses: vec![UseStatement::new(
                "Magento\\Framework\\Component\\ComponentRegistrar",
            )],
            body: Some(
                "ComponentRegistrar::register(ComponentRegistrar::MODULE, 'Acme_Sales', __DIR__);"
                    .to_string(),
            ),
            ..PhpFile::default()
        };

        let out = file.render();
        assert!(out.starts_with("<?php\n/**\n * Copyright (c) Acme. All rights reserved.\n"));
        assert!(out.contains("\nuse Magento\\Framework\\Component\\ComponentRegistrar;\n"));
        assert!(out.ends_with("'Acme_Sales', __DIR__);\n"));
        assert!(!out.contains("namespace"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let build = || {
            PhpFile::class(
                "Acme\\Sales\\Model",
                ClassSpec::new("Order")
                    .method(Method::public("getName").body("return $this->getDataByKey('name');"))
                    .method(Method::public("setName").body("return $this->setData('name', $name);")),
            )
        };
        assert_eq!(build().render(), build().render());
    }
}
