//! `model` operation: model, resource model and collection classes

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::php::{ClassSpec, DocBlock, Method, PhpFile, UseStatement};
use crate::scaffold::name::{validate_key, ModuleName, TypePath};

const ABSTRACT_MODEL: &str = "Magento\\Framework\\Model\\AbstractModel";
const ABSTRACT_DB: &str = "Magento\\Framework\\Model\\ResourceModel\\Db\\AbstractDb";
const ABSTRACT_COLLECTION: &str =
    "Magento\\Framework\\Model\\ResourceModel\\Db\\Collection\\AbstractCollection";

/// Create the model/resource-model/collection triple for one entity.
///
/// Existing files are left untouched; only paths actually written are
/// returned.
pub fn create_model(
    root: &Path,
    module: &ModuleName,
    model_path: &TypePath,
    main_table: &str,
    id_field: &str,
) -> Result<Vec<PathBuf>> {
    validate_key("table name", main_table)?;
    validate_key("id field", id_field)?;
    debug!(module = %module, model = %model_path, "creating model classes");

    let namespace = module.namespace();
    let model_class = format!("{namespace}\\Model\\{model_path}");
    let resource_class = format!("{namespace}\\Model\\ResourceModel\\{model_path}");
    let collection_class = format!("{resource_class}\\Collection");

    let relative = model_path.file_path();
    let mut created = Vec::new();

    let resource_file = root
        .join("Model/ResourceModel")
        .join(&relative)
        .with_extension("php");
    let resource = PhpFile::class(
        parent_namespace(&resource_class),
        ClassSpec::new(model_path.leaf())
            .extends("AbstractDb")
            .method(construct_method(format!(
                "$this->_init('{main_table}', '{id_field}');"
            ))),
    )
    .import(UseStatement::new(ABSTRACT_DB));
    if resource.write(&resource_file, false)? {
        created.push(resource_file);
    }

    let model_file = root.join("Model").join(&relative).with_extension("php");
    let model = PhpFile::class(
        parent_namespace(&model_class),
        ClassSpec::new(model_path.leaf())
            .extends("AbstractModel")
            .method(construct_method("$this->_init(ResourceModel::class);")),
    )
    .import(UseStatement::new(ABSTRACT_MODEL))
    .import(UseStatement::aliased(&resource_class, "ResourceModel"));
    if model.write(&model_file, false)? {
        created.push(model_file);
    }

    let collection_file = root
        .join("Model/ResourceModel")
        .join(&relative)
        .join("Collection.php");
    let collection = PhpFile::class(
        parent_namespace(&collection_class),
        ClassSpec::new("Collection")
            .extends("AbstractCollection")
            .method(construct_method(
                "$this->_init(Model::class, ResourceModel::class);",
            )),
    )
    .import(UseStatement::new(ABSTRACT_COLLECTION))
    .import(UseStatement::aliased(&model_class, "Model"))
    .import(UseStatement::aliased(&resource_class, "ResourceModel"));
    if collection.write(&collection_file, false)? {
        created.push(collection_file);
    }

    Ok(created)
}

fn construct_method(body: impl Into<String>) -> Method {
    Method::protected("_construct")
        .body(body)
        .doc(DocBlock::inherit_doc())
}

fn parent_namespace(class: &str) -> String {
    match class.rsplit_once('\\') {
        Some((namespace, _)) => namespace.to_string(),
        None => String::new(),
    }
}
