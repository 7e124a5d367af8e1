//! UI listing (grid) component builder
//!
//! Seeds a `<listing>` document with the toolbar, mass actions, data source
//! and the standard selection/id/actions columns. Additional columns are
//! appended through [`UiListingBuilder::add_column`].

use std::path::Path;

use crate::config::arguments::{arg, assign_arguments, ArgValue};
use crate::config::schema::{assign_attributes, AttrKind, AttrSchema, AttrValue};
use crate::config::XmlConfig;
use crate::error::Result;
use crate::spec::Spec;
use crate::xml::{Element, NodeId};

const UI_SCHEMA: &str = "urn:magento:module:Magento_Ui:etc/ui_configuration.xsd";

/// Class rendering the per-row edit/delete links; ships with the companion
/// base module the generated code extends.
const ACTIONS_COLUMN_CLASS: &str = "Mageforge\\Base\\Ui\\Component\\Listing\\Column\\Actions";

const DATA_PROVIDER_CLASS: &str =
    "Magento\\Framework\\View\\Element\\UiComponent\\DataProvider\\DataProvider";

const COLUMN_ATTRS: AttrSchema = AttrSchema::new(&[
    ("class", AttrKind::Str),
    ("component", AttrKind::Str),
    ("template", AttrKind::Str),
    ("provider", AttrKind::Str),
    ("extends", AttrKind::Str),
    ("displayArea", AttrKind::Str),
]);

/// Builder for `ui_component/<namespace>_listing.xml` documents.
#[derive(Clone, Debug)]
pub struct UiListingBuilder {
    config: XmlConfig,
    columns: NodeId,
}

impl UiListingBuilder {
    pub fn new(namespace: &str, acl_resource: &str, action_path: &str) -> Result<Self> {
        let mut config = XmlConfig::new("listing", UI_SCHEMA);

        let data_source_name = "listing_data_source";
        let data_provider_name = "listing_data_provider";
        let columns_name = format!("{namespace}_columns");
        let provider = format!("{namespace}.{data_source_name}");
        let source_provider = format!("{namespace}.{data_provider_name}");
        let editor_provider = format!("{namespace}.{namespace}.columns_editor");

        assign_arguments(
            config.root_mut(),
            &vec![arg(
                "data",
                ArgValue::map(vec![arg(
                    "js_config",
                    ArgValue::map(vec![arg("provider", ArgValue::str(&provider))]),
                )]),
            )],
            "argument",
        )?;

        config.assign(
            &NodeId::root(),
            &Spec::new()
                .child(
                    "settings",
                    Spec::new()
                        .child("spinner", columns_name.as_str())
                        .child("deps", Spec::new().child("dep", source_provider.as_str())),
                )
                .child(
                    "dataSource",
                    Spec::new()
                        .attr("name", data_source_name)
                        .attr("component", "Magento_Ui/js/grid/provider")
                        .child(
                            "settings",
                            Spec::new()
                                .child(
                                    "storageConfig",
                                    Spec::new().child(
                                        "param",
                                        Spec::new()
                                            .text("id")
                                            .attr("name", "indexField")
                                            .attr("xsi:type", "string"),
                                    ),
                                )
                                .child("updateUrl", Spec::new().attr("path", "mui/index/render")),
                        )
                        .child("aclResource", acl_resource)
                        .child(
                            "dataProvider",
                            Spec::new()
                                .attr("class", DATA_PROVIDER_CLASS)
                                .attr("name", data_provider_name)
                                .child(
                                    "settings",
                                    Spec::new()
                                        .child("primaryFieldName", "id")
                                        .child("requestFieldName", "id"),
                                ),
                        ),
                )
                .child("listingToolbar", toolbar_spec(&editor_provider)),
        )?;

        let mut columns = Element::new("columns");
        columns.set_attribute("name", &columns_name);
        let columns_id = config.push_child(&NodeId::root(), columns)?;
        config.assign(
            &columns_id,
            &Spec::new()
                .child(
                    "selectionsColumn",
                    Spec::new()
                        .attr("name", "ids")
                        .attr("sortOrder", 0)
                        .child("settings", Spec::new().child("indexField", "id")),
                )
                .child(
                    "column",
                    Spec::new().attr("name", "id").attr("sortOrder", 0).child(
                        "settings",
                        Spec::new()
                            .child("filter", "textRange")
                            .child(
                                "label",
                                Spec::new().text("ID").attr("translate", "true"),
                            )
                            .child("sorting", "ASC"),
                    ),
                )
                .child(
                    "actionsColumn",
                    Spec::new()
                        .attr("class", ACTIONS_COLUMN_CLASS)
                        .attr("name", "actions")
                        .attr("sortOrder", 999)
                        .child(
                            "settings",
                            Spec::new().child(
                                "fieldAction",
                                Spec::new().child(
                                    "params",
                                    Spec::new().child(
                                        "param",
                                        Spec::new()
                                            .text(action_path)
                                            .attr("name", "route")
                                            .attr("xsi:type", "string"),
                                    ),
                                ),
                            ),
                        ),
                ),
        )?;

        Ok(Self {
            config,
            columns: columns_id,
        })
    }

    /// Append a data column. `settings` is assigned verbatim under the
    /// column's `<settings>` node; `attributes` are checked against the
    /// column schema.
    pub fn add_column(
        &mut self,
        name: &str,
        settings: &Spec,
        sort_order: i64,
        attributes: &[(&str, AttrValue)],
    ) -> Result<NodeId> {
        let mut column = Element::new("column");
        column.set_attribute("name", name);
        column.set_attribute("sortOrder", sort_order.to_string());
        assign_attributes(&mut column, attributes, &COLUMN_ATTRS)?;

        let id = self.config.push_child(&self.columns.clone(), column)?;
        self.config
            .assign(&id, &Spec::new().child("settings", settings.clone()))?;
        Ok(id)
    }

    pub fn generate(&self) -> String {
        self.config.generate()
    }

    pub fn write(&self, path: &Path, overwrite: bool) -> Result<bool> {
        self.config.write(path, overwrite)
    }
}

fn toolbar_spec(editor_provider: &str) -> Spec {
    Spec::new()
        .attr("name", "listing_top")
        .child("settings", Spec::new().child("sticky", "true"))
        .child("bookmark", Spec::new().attr("name", "bookmark"))
        .child("columnsControls", Spec::new().attr("name", "columns_controls"))
        .child("filterSearch", Spec::new().attr("name", "fulltext"))
        .child("paging", Spec::new().attr("name", "listing_paging"))
        .child(
            "filters",
            Spec::new().attr("name", "listing_filters").child(
                "settings",
                Spec::new().child(
                    "templates",
                    Spec::new().child(
                        "filters",
                        Spec::new().child(
                            "select",
                            Spec::new().child(
                                "param",
                                vec![
                                    Spec::new()
                                        .text("ui/grid/filters/elements/ui-select")
                                        .attr("name", "template")
                                        .attr("xsi:type", "string"),
                                    Spec::new()
                                        .text("Magento_Ui/js/form/element/ui-select")
                                        .attr("name", "component")
                                        .attr("xsi:type", "string"),
                                ],
                            ),
                        ),
                    ),
                ),
            ),
        )
        .child(
            "massaction",
            Spec::new().attr("name", "listing_actions").child(
                "action",
                Spec::new().attr("name", "edit").child(
                    "settings",
                    Spec::new()
                        .child("type", "edit")
                        .child("label", Spec::new().text("Edit").attr("translate", "true"))
                        .child(
                            "callback",
                            Spec::new()
                                .child("target", "editSelected")
                                .child("provider", editor_provider),
                        ),
                ),
            ),
        )
}
