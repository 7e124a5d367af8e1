//! `api` operation: data interface and backing DataObject model

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::php::{
    ClassSpec, DocBlock, InterfaceSpec, Method, PhpFile, Tag, UseStatement,
};
use crate::scaffold::name::{FieldName, ModuleName, TypePath};

const DATA_OBJECT: &str = "Magento\\Framework\\DataObject";

/// Create `Api/Data/<Path>Interface.php` and `Model/<Path>.php` with typed
/// get/set accessors for `fields`.
///
/// This pair is all-or-nothing: if either target exists the operation fails
/// before writing anything.
pub fn create_api(
    root: &Path,
    module: &ModuleName,
    path: &TypePath,
    fields: &[FieldName],
) -> Result<Vec<PathBuf>> {
    let relative = path.file_path();
    let interface_file = root
        .join("Api/Data")
        .join(&relative)
        .with_extension("")
        .with_file_name(format!("{}Interface.php", path.leaf()));
    let model_file = root.join("Model").join(&relative).with_extension("php");

    for target in [&interface_file, &model_file] {
        if target.exists() {
            return Err(Error::validation(format!(
                "target file already exists: {}",
                target.display()
            )));
        }
    }
    debug!(module = %module, path = %path, "creating api data interface");

    let namespace = module.namespace();
    let interface_name = format!("{}Interface", path.leaf());
    let interface_fqn = format!(
        "{namespace}\\Api\\Data\\{}{interface_name}",
        prefix_with_separator(path)
    );

    let mut interface = InterfaceSpec::new(&interface_name);
    let mut model = ClassSpec::new(path.leaf())
        .extends("DataObject")
        .implement(&interface_name);

    for field in fields {
        let accessor = field.camel();
        let param = field.param();

        interface = interface.method(
            Method::public(format!("get{accessor}")).doc(
                DocBlock::short(format!("Get {field}")).tag(Tag::new("return", "string")),
            ),
        );
        interface = interface.method(
            Method::public(format!("set{accessor}")).param(&param).doc(
                DocBlock::short(format!("Set {field}"))
                    .tag(Tag::new("param", format!("string ${param}")))
                    .tag(Tag::new("return", &interface_name)),
            ),
        );

        model = model.method(
            Method::public(format!("get{accessor}"))
                .body(format!("return $this->getDataByKey('{field}');"))
                .doc(DocBlock::inherit_doc()),
        );
        model = model.method(
            Method::public(format!("set{accessor}"))
                .param(&param)
                .body(format!("return $this->setData('{field}', ${param});"))
                .doc(DocBlock::inherit_doc()),
        );
    }

    let interface_namespace = join_namespace(&format!("{namespace}\\Api\\Data"), path);
    let interface_php = PhpFile::interface(interface_namespace, interface)
        .doc(DocBlock::default().tag(Tag::bare("api")));

    let model_namespace = join_namespace(&format!("{namespace}\\Model"), path);
    let model_php = PhpFile::class(model_namespace, model)
        .import(UseStatement::new(DATA_OBJECT))
        .import(UseStatement::new(&interface_fqn));

    let mut created = Vec::new();
    if interface_php.write(&interface_file, false)? {
        created.push(interface_file);
    }
    if model_php.write(&model_file, false)? {
        created.push(model_file);
    }
    Ok(created)
}

fn prefix_with_separator(path: &TypePath) -> String {
    let prefix = path.prefix().join("\\");
    if prefix.is_empty() {
        prefix
    } else {
        format!("{prefix}\\")
    }
}

fn join_namespace(base: &str, path: &TypePath) -> String {
    let prefix = path.prefix().join("\\");
    if prefix.is_empty() {
        base.to_string()
    } else {
        format!("{base}\\{prefix}")
    }
}
