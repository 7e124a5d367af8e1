//! `admin-ui` operation: route, controllers, layouts and UI components
//!
//! One call produces everything a CRUD list page in the admin panel needs:
//! the adminhtml route declaration, six controller actions backed by the
//! companion base module, three layout handles, and the listing and form
//! UI component documents.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{
    arg, ArgValue, Args, LayoutBuilder, UiFormBuilder, UiListingBuilder, XmlConfig,
};
use crate::error::Result;
use crate::php::{ClassSpec, DocBlock, Method, PhpFile, UseStatement};
use crate::scaffold::name::{validate_key, ModuleName, TypePath};
use crate::scaffold::BASE_CONTROLLER_NS;
use crate::spec::Spec;
use crate::xml::NodeId;

const ROUTES_SCHEMA: &str = "urn:magento:framework:App/etc/routes.xsd";
const SPLIT_BUTTON_CLASS: &str = "Magento\\Ui\\Component\\Control\\SplitButton";
const MISSING_ITEM_MESSAGE: &str = "Specified item does not exist.";

/// Inputs for [`create_admin_ui`].
#[derive(Clone, Debug)]
pub struct AdminUiOptions {
    pub module: ModuleName,
    /// Controller path below `Controller/Adminhtml`, e.g. `Order`.
    pub controller_path: TypePath,
    /// Model path below `Model`; the edit/save/delete actions operate on it.
    pub model_path: TypePath,
    /// Admin route id, also used as the front name.
    pub route: String,
}

/// Create the full admin UI file set for one entity.
///
/// Existing files are skipped individually, so the operation can be rerun
/// to fill in pieces deleted by hand.
pub fn create_admin_ui(root: &Path, options: &AdminUiOptions) -> Result<Vec<PathBuf>> {
    validate_key("route name", &options.route)?;

    let module_name = options.module.to_string();
    let key = options.controller_path.key();
    let persist_key = format!("{}_{key}", options.module.module().to_lowercase());
    let ui_namespace = format!("{}_{key}", options.route);
    let acl_resource = format!("{module_name}::{ui_namespace}");
    let listing_action_path = format!("{}/{key}", options.route);
    let submit_url = format!("{listing_action_path}/save");
    let active_menu = format!("{module_name}::{persist_key}");
    let page_title = options.controller_path.title();

    let namespace = format!(
        "{}\\Controller\\Adminhtml\\{}",
        options.module.namespace(),
        options.controller_path
    );
    let model_class = format!("{}\\Model\\{}", options.module.namespace(), options.model_path);
    let data_provider_class = format!("{model_class}\\DataProvider");

    debug!(module = %module_name, route = %options.route, "creating admin ui files");

    let controller_dir = root
        .join("Controller/Adminhtml")
        .join(options.controller_path.file_path());
    let layout_dir = root.join("view/adminhtml/layout");
    let ui_component_dir = root.join("view/adminhtml/ui_component");

    let mut created = Vec::new();
    let mut track = |path: PathBuf, written: bool| {
        if written {
            created.push(path);
        }
    };

    let routes = root.join("etc/adminhtml/routes.xml");
    track(routes.clone(), write_routes(&routes, &options.route, &module_name)?);

    for (file, php) in [
        (
            "Index.php",
            index_controller(&namespace, &persist_key, &active_menu, &page_title),
        ),
        ("NewAction.php", new_controller(&namespace)),
        ("Edit.php", edit_controller(&namespace, &model_class, &active_menu)),
        ("Delete.php", delete_controller(&namespace, &model_class)),
        ("Save.php", save_controller(&namespace, &model_class)),
        ("MassSave.php", mass_save_controller(&namespace, &model_class)),
    ] {
        let path = controller_dir.join(file);
        let written = php.write(&path, false)?;
        track(path, written);
    }

    let index_layout = layout_dir.join(format!("{ui_namespace}_index.xml"));
    track(
        index_layout.clone(),
        write_index_layout(&index_layout, &ui_namespace)?,
    );
    let new_layout = layout_dir.join(format!("{ui_namespace}_new.xml"));
    track(new_layout.clone(), write_new_layout(&new_layout, &ui_namespace)?);
    let edit_layout = layout_dir.join(format!("{ui_namespace}_edit.xml"));
    track(
        edit_layout.clone(),
        write_edit_layout(&edit_layout, &ui_namespace)?,
    );

    let listing_namespace = format!("{ui_namespace}_listing");
    let listing_file = ui_component_dir.join(format!("{listing_namespace}.xml"));
    track(
        listing_file.clone(),
        write_listing(
            &listing_file,
            &listing_namespace,
            &acl_resource,
            &listing_action_path,
        )?,
    );

    let form_namespace = format!("{ui_namespace}_form");
    let form_file = ui_component_dir.join(format!("{form_namespace}.xml"));
    track(
        form_file.clone(),
        write_form(&form_file, &form_namespace, &data_provider_class, &submit_url)?,
    );

    Ok(created)
}

fn write_routes(path: &Path, route: &str, module_name: &str) -> Result<bool> {
    let mut config = XmlConfig::new("config", ROUTES_SCHEMA);
    config.assign(
        &NodeId::root(),
        &Spec::new().child(
            "router",
            Spec::new().attr("id", "admin").child(
                "route",
                Spec::new()
                    .attr("id", route)
                    .attr("frontName", route)
                    .child(
                        "module",
                        Spec::new()
                            .attr("name", module_name)
                            .attr("before", "Magento_Backend"),
                    ),
            ),
        ),
    )?;
    config.write(path, false)
}

fn action_class(
    namespace: &str,
    class_name: &str,
    base: &str,
    model_class: Option<&str>,
    execute_body: Option<String>,
) -> PhpFile {
    let mut class = ClassSpec::new(class_name).extends(base);
    if let Some(body) = execute_body {
        class = class.method(
            Method::public("execute")
                .body(body)
                .doc(DocBlock::inherit_doc()),
        );
    }
    let mut file = PhpFile::class(namespace, class)
        .import(UseStatement::new(format!("{BASE_CONTROLLER_NS}\\{base}")));
    if let Some(model) = model_class {
        file = file.import(UseStatement::aliased(model, "Model"));
    }
    file
}

fn index_controller(
    namespace: &str,
    persist_key: &str,
    active_menu: &str,
    page_title: &str,
) -> PhpFile {
    action_class(
        namespace,
        "Index",
        "AbstractIndexAction",
        None,
        Some(format!(
            "return $this->render('{persist_key}', '{active_menu}', '{page_title}');"
        )),
    )
}

fn new_controller(namespace: &str) -> PhpFile {
    action_class(namespace, "NewAction", "AbstractNewAction", None, None)
}

fn edit_controller(namespace: &str, model_class: &str, active_menu: &str) -> PhpFile {
    action_class(
        namespace,
        "Edit",
        "AbstractEditAction",
        Some(model_class),
        Some(format!(
            "return $this->render(Model::class, '{MISSING_ITEM_MESSAGE}', '{active_menu}', \
             'Create New Item', 'Edit Item (ID: %1)');"
        )),
    )
}

fn delete_controller(namespace: &str, model_class: &str) -> PhpFile {
    action_class(
        namespace,
        "Delete",
        "AbstractDeleteAction",
        Some(model_class),
        Some(format!(
            "return $this->delete(Model::class, '{MISSING_ITEM_MESSAGE}', 'Item deleted.');"
        )),
    )
}

fn save_controller(namespace: &str, model_class: &str) -> PhpFile {
    action_class(
        namespace,
        "Save",
        "AbstractSaveAction",
        Some(model_class),
        Some(format!(
            "return $this->save(Model::class, '{MISSING_ITEM_MESSAGE}', 'Item saved successfully.');"
        )),
    )
}

fn mass_save_controller(namespace: &str, model_class: &str) -> PhpFile {
    action_class(
        namespace,
        "MassSave",
        "AbstractMassSaveAction",
        Some(model_class),
        Some("return $this->save(Model::class);".to_string()),
    )
}

fn write_index_layout(path: &Path, ui_namespace: &str) -> Result<bool> {
    let mut layout = LayoutBuilder::new();
    let container = layout.reference_container("content", &[])?;
    layout.add_ui_component(&container, &format!("{ui_namespace}_listing"), &[])?;
    layout.write(path, false)
}

fn write_new_layout(path: &Path, ui_namespace: &str) -> Result<bool> {
    let mut layout = LayoutBuilder::new();
    layout.add_update(&format!("{ui_namespace}_edit"));
    layout.write(path, false)
}

fn write_edit_layout(path: &Path, ui_namespace: &str) -> Result<bool> {
    let mut layout = LayoutBuilder::new();
    layout.add_update("editor");
    let container = layout.reference_container("content", &[])?;
    layout.add_ui_component(&container, &format!("{ui_namespace}_form"), &[])?;
    layout.write(path, false)
}

fn write_listing(
    path: &Path,
    namespace: &str,
    acl_resource: &str,
    action_path: &str,
) -> Result<bool> {
    let mut listing = UiListingBuilder::new(namespace, acl_resource, action_path)?;
    listing.add_column(
        "name",
        &Spec::new()
            .child("filter", "text")
            .child("label", Spec::new().text("Name").attr("translate", "true"))
            .child(
                "editor",
                Spec::new().child("editorType", "text").child(
                    "validation",
                    Spec::new().child(
                        "rule",
                        Spec::new()
                            .text("true")
                            .attr("name", "required-entry")
                            .attr("xsi:type", "boolean"),
                    ),
                ),
            ),
        10,
        &[],
    )?;
    listing.write(path, false)
}

fn write_form(
    path: &Path,
    namespace: &str,
    data_provider_class: &str,
    submit_url: &str,
) -> Result<bool> {
    let mut form = UiFormBuilder::new(namespace, data_provider_class, submit_url)?;
    form.add_button("back", "Back", "back", Some("*/*/index"), None, &Vec::new())?;
    form.add_button("reset", "Reset", "reset", None, None, &Vec::new())?;
    form.add_button(
        "save",
        "Save",
        "save primary",
        None,
        None,
        &save_button_params(namespace),
    )?;

    let fieldset = form.add_fieldset("general", None)?;
    form.add_field(
        &fieldset,
        "id",
        "input",
        &Spec::new()
            .child("dataType", "text")
            .child("visible", "false")
            .child("dataScope", "data.id"),
        &vec![arg(
            "data",
            ArgValue::map(vec![arg(
                "config",
                ArgValue::map(vec![arg("source", ArgValue::str("data"))]),
            )]),
        )],
    )?;
    form.write(path, false)
}

fn save_action(namespace: &str, back_target: &str) -> ArgValue {
    ArgValue::map(vec![arg(
        "0",
        ArgValue::map(vec![
            arg("targetName", ArgValue::str(format!("{namespace}.{namespace}"))),
            arg("actionName", ArgValue::str("save")),
            arg(
                "params",
                ArgValue::map(vec![
                    arg("0", ArgValue::Bool(true)),
                    arg(
                        "1",
                        ArgValue::map(vec![arg("back", ArgValue::str(back_target))]),
                    ),
                ]),
            ),
        ]),
    )])
}

fn mage_init(namespace: &str, back_target: &str) -> ArgValue {
    ArgValue::map(vec![arg(
        "mage-init",
        ArgValue::map(vec![arg(
            "buttonAdapter",
            ArgValue::map(vec![arg("actions", save_action(namespace, back_target))]),
        )]),
    )])
}

fn save_button_params(namespace: &str) -> Args {
    vec![
        arg("data_attribute", mage_init(namespace, "continue")),
        arg("class_name", ArgValue::str(SPLIT_BUTTON_CLASS)),
        arg(
            "options",
            ArgValue::map(vec![arg(
                "0",
                ArgValue::map(vec![
                    arg("id_hard", ArgValue::str("save_and_close")),
                    arg("label", ArgValue::str("Save and Close")),
                    arg("data_attribute", mage_init(namespace, "close")),
                ]),
            )]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn options() -> Result<AdminUiOptions> {
        Ok(AdminUiOptions {
            module: "Acme_Sales".parse()?,
            controller_path: "Order".parse()?,
            model_path: "Order".parse()?,
            route: "sales".to_string(),
        })
    }

    fn read(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }

    #[test]
    fn test_full_file_set() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        let created = create_admin_ui(dir.path(), &options()?)?;
        assert_eq!(created.len(), 12);

        for relative in [
            "etc/adminhtml/routes.xml",
            "Controller/Adminhtml/Order/Index.php",
            "Controller/Adminhtml/Order/NewAction.php",
            "Controller/Adminhtml/Order/Edit.php",
            "Controller/Adminhtml/Order/Delete.php",
            "Controller/Adminhtml/Order/Save.php",
            "Controller/Adminhtml/Order/MassSave.php",
            "view/adminhtml/layout/sales_order_index.xml",
            "view/adminhtml/layout/sales_order_new.xml",
            "view/adminhtml/layout/sales_order_edit.xml",
            "view/adminhtml/ui_component/sales_order_listing.xml",
            "view/adminhtml/ui_component/sales_order_form.xml",
        ] {
            assert!(dir.path().join(relative).exists(), "missing {relative}");
        }
        Ok(())
    }

    #[test]
    fn test_routes_document() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        create_admin_ui(dir.path(), &options()?)?;
        let routes = read(&dir.path().join("etc/adminhtml/routes.xml"))?;
        assert!(routes.contains("<router id=\"admin\">"));
        assert!(routes.contains("<route id=\"sales\" frontName=\"sales\">"));
        assert!(routes.contains("<module name=\"Acme_Sales\" before=\"Magento_Backend\"/>"));
        Ok(())
    }

    #[test]
    fn test_index_controller_body() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        create_admin_ui(dir.path(), &options()?)?;
        let index = read(&dir.path().join("Controller/Adminhtml/Order/Index.php"))?;
        assert!(index.contains("namespace Acme\\Sales\\Controller\\Adminhtml\\Order;"));
        assert!(index.contains("class Index extends AbstractIndexAction"));
        assert!(index.contains(
            "return $this->render('sales_order', 'Acme_Sales::sales_order', 'Order');"
        ));
        Ok(())
    }

    #[test]
    fn test_edit_controller_aliases_model() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        create_admin_ui(dir.path(), &options()?)?;
        let edit = read(&dir.path().join("Controller/Adminhtml/Order/Edit.php"))?;
        assert!(edit.contains("use Acme\\Sales\\Model\\Order as Model;"));
        assert!(edit.contains("'Edit Item (ID: %1)'"));
        Ok(())
    }

    #[test]
    fn test_layout_handles() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        create_admin_ui(dir.path(), &options()?)?;

        let index = read(&dir.path().join("view/adminhtml/layout/sales_order_index.xml"))?;
        assert!(index.contains("<uiComponent name=\"sales_order_listing\"/>"));

        let new = read(&dir.path().join("view/adminhtml/layout/sales_order_new.xml"))?;
        assert!(new.contains("<update handle=\"sales_order_edit\"/>"));

        let edit = read(&dir.path().join("view/adminhtml/layout/sales_order_edit.xml"))?;
        assert!(edit.contains("<update handle=\"editor\"/>"));
        assert!(edit.contains("<uiComponent name=\"sales_order_form\"/>"));
        Ok(())
    }

    #[test]
    fn test_form_split_button() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        create_admin_ui(dir.path(), &options()?)?;
        let form = read(&dir.path().join("view/adminhtml/ui_component/sales_order_form.xml"))?;
        assert!(form.contains("<submitUrl path=\"sales/order/save\"/>"));
        assert!(form.contains(
            "<item name=\"targetName\" xsi:type=\"string\">sales_order_form.sales_order_form</item>"
        ));
        assert!(form.contains("<item name=\"back\" xsi:type=\"string\">continue</item>"));
        assert!(form.contains("<item name=\"back\" xsi:type=\"string\">close</item>"));
        assert!(form.contains("Magento\\Ui\\Component\\Control\\SplitButton"));
        Ok(())
    }

    #[test]
    fn test_rerun_fills_missing_files_only() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        create_admin_ui(dir.path(), &options()?)?;
        let listing_file = dir
            .path()
            .join("view/adminhtml/ui_component/sales_order_listing.xml");
        std::fs::remove_file(&listing_file).map_err(|e| Error::io(&listing_file, e))?;

        let created = create_admin_ui(dir.path(), &options()?)?;
        assert_eq!(created, vec![listing_file]);
        Ok(())
    }

    #[test]
    fn test_invalid_route_rejected() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| Error::io(".", e))?;
        let mut opts = options()?;
        opts.route = "Bad-Route".to_string();
        let err = create_admin_ui(dir.path(), &opts);
        assert!(matches!(err, Err(Error::Validation(_))));
        Ok(())
    }
}
