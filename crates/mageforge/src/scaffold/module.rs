//! `module` operation: registration, module.xml and composer manifest

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::config::XmlConfig;
use crate::error::{Error, Result};
use crate::php::{DocBlock, PhpFile, UseStatement};
use crate::scaffold::name::{validate_version, ModuleName, PackageName};
use crate::spec::Spec;
use crate::xml::writer::write_text;

const MODULE_SCHEMA: &str = "urn:magento:framework:Module/etc/module.xsd";
const COMPONENT_REGISTRAR: &str = "Magento\\Framework\\Component\\ComponentRegistrar";

/// Inputs for [`create_module`].
#[derive(Clone, Debug)]
pub struct ModuleOptions {
    pub name: ModuleName,
    pub package: PackageName,
    pub author: String,
    pub description: String,
    pub version: String,
    pub license: Option<String>,
}

#[derive(Serialize)]
struct ComposerManifest {
    name: String,
    description: String,
    #[serde(rename = "type")]
    package_type: &'static str,
    version: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    license: Vec<String>,
    require: IndexMap<&'static str, &'static str>,
    autoload: Autoload,
}

#[derive(Serialize)]
struct Autoload {
    files: Vec<&'static str>,
    #[serde(rename = "psr-4")]
    psr4: IndexMap<String, String>,
}

/// Create the skeleton of a new module under `root`: `registration.php`,
/// `etc/module.xml` and `composer.json`.
///
/// Refuses to run when `root` already holds a `registration.php`.
pub fn create_module(root: &Path, options: &ModuleOptions) -> Result<Vec<PathBuf>> {
    validate_version(&options.version)?;

    let registration = root.join("registration.php");
    if registration.exists() {
        return Err(Error::validation(format!(
            "module already exists at {}",
            root.display()
        )));
    }
    debug!(module = %options.name, root = %root.display(), "creating module skeleton");

    let mut created = Vec::new();

    if write_registration(&registration, options)? {
        created.push(registration);
    }

    let module_xml = root.join("etc").join("module.xml");
    if write_module_xml(&module_xml, options)? {
        created.push(module_xml);
    }

    let composer = root.join("composer.json");
    if write_composer(&composer, options)? {
        created.push(composer);
    }

    Ok(created)
}

fn write_registration(path: &Path, options: &ModuleOptions) -> Result<bool> {
    let copyright = format!(
        "Copyright (c) {}. All rights reserved.\nSee COPYING.txt for license details.",
        options.author
    );
    let file = PhpFile {
        doc_block: Some(DocBlock::short(copyright)),
        uses: vec![UseStatement::new(COMPONENT_REGISTRAR)],
        body: Some(format!(
            "ComponentRegistrar::register(ComponentRegistrar::MODULE, '{}', __DIR__);",
            options.name
        )),
        ..PhpFile::default()
    };
    file.write(path, false)
}

fn write_module_xml(path: &Path, options: &ModuleOptions) -> Result<bool> {
    let mut config = XmlConfig::new("config", MODULE_SCHEMA);
    config.assign(
        &crate::xml::NodeId::root(),
        &Spec::new().child(
            "module",
            Spec::new()
                .attr("name", options.name.to_string())
                .child("sequence", None::<&str>),
        ),
    )?;
    config.write(path, false)
}

fn write_composer(path: &Path, options: &ModuleOptions) -> Result<bool> {
    let mut require = IndexMap::new();
    require.insert("php", "~7.4.0||~8.1.0");
    require.insert("magento/framework", "103.0.*");

    let mut psr4 = IndexMap::new();
    psr4.insert(format!("{}\\", options.name.namespace()), String::new());

    let manifest = ComposerManifest {
        name: options.package.to_string(),
        description: options.description.clone(),
        package_type: "magento2-module",
        version: options.version.clone(),
        license: options.license.iter().cloned().collect(),
        require,
        autoload: Autoload {
            files: vec!["registration.php"],
            psr4,
        },
    };

    let rendered = serde_json::to_string_pretty(&manifest)
        .map_err(|source| Error::validation(format!("composer manifest serialization: {source}")))?;
    write_text(path, &format!("{rendered}\n"), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Result<ModuleOptions> {
        Ok(ModuleOptions {
            name: "Acme_Sales".parse()?,
            package: "acme/module-sales".parse()?,
            author: "Acme".to_string(),
            description: "A Magento 2 module.".to_string(),
            version: "1.0.0".to_string(),
            license: Some("OSL-3.0".to_string()),
        })
    }

    #[test]
    fn test_create_module_emits_three_files() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        let created = create_module(dir.path(), &options()?)?;
        assert_eq!(created.len(), 3);

        let registration =
            std::fs::read_to_string(dir.path().join("registration.php")).map_err(|e| Error::io(".", e))?;
        assert!(registration.contains("'Acme_Sales', __DIR__"));
        assert!(registration.contains("Copyright (c) Acme."));

        let module_xml =
            std::fs::read_to_string(dir.path().join("etc/module.xml")).map_err(|e| Error::io(".", e))?;
        assert!(module_xml.contains("<module name=\"Acme_Sales\"><sequence/></module>"));
        Ok(())
    }

    #[test]
    fn test_create_module_refuses_existing() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        create_module(dir.path(), &options()?)?;
        let err = create_module(dir.path(), &options()?);
        assert!(matches!(err, Err(Error::Validation(_))));
        Ok(())
    }

    #[test]
    fn test_composer_manifest_shape() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        create_module(dir.path(), &options()?)?;
        let composer =
            std::fs::read_to_string(dir.path().join("composer.json")).map_err(|e| Error::io(".", e))?;
        assert!(composer.contains("\"name\": \"acme/module-sales\""));
        assert!(composer.contains("\"type\": \"magento2-module\""));
        assert!(composer.contains("\"magento/framework\": \"103.0.*\""));
        assert!(composer.contains("\"Acme\\\\Sales\\\\\": \"\""));
        assert!(composer.contains("\"OSL-3.0\""));
        Ok(())
    }

    #[test]
    fn test_license_omitted_when_absent() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        let mut opts = options()?;
        opts.license = None;
        create_module(dir.path(), &opts)?;
        let composer =
            std::fs::read_to_string(dir.path().join("composer.json")).map_err(|e| Error::io(".", e))?;
        assert!(!composer.contains("license"));
        Ok(())
    }
}
