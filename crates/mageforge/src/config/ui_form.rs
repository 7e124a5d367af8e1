//! UI form component builder
//!
//! Seeds a complete `<form>` document: data provider wiring, namespace and
//! deps settings, and the data source with its submit URL. Buttons, fieldsets
//! and fields are added on top.

use std::path::Path;

use crate::config::arguments::{arg, assign_arguments, ArgValue, Args};
use crate::config::XmlConfig;
use crate::error::Result;
use crate::spec::Spec;
use crate::xml::{Element, NodeId};

const UI_SCHEMA: &str = "urn:magento:module:Magento_Ui:etc/ui_configuration.xsd";

/// Builder for `ui_component/<namespace>_form.xml` documents.
#[derive(Clone, Debug)]
pub struct UiFormBuilder {
    config: XmlConfig,
    settings: NodeId,
    buttons: Option<NodeId>,
}

impl UiFormBuilder {
    pub fn new(namespace: &str, data_provider_class: &str, submit_url: &str) -> Result<Self> {
        let mut config = XmlConfig::new("form", UI_SCHEMA);

        let data_source_name = "form_data_source";
        let data_provider_name = "form_data_provider";
        let provider = format!("{namespace}.{data_source_name}");
        let source_provider = format!("{namespace}.{data_provider_name}");

        assign_arguments(
            config.root_mut(),
            &vec![arg(
                "data",
                ArgValue::map(vec![
                    arg(
                        "js_config",
                        ArgValue::map(vec![arg("provider", ArgValue::str(&provider))]),
                    ),
                    arg("label", ArgValue::translated("General Information")),
                    arg("template", ArgValue::str("templates/form/collapsible")),
                ]),
            )],
            "argument",
        )?;

        let settings = config.push_child(&NodeId::root(), Element::new("settings"))?;
        config.assign(
            &settings,
            &Spec::new()
                .child("namespace", namespace)
                .child("dataScope", "data")
                .child("deps", Spec::new().child("dep", source_provider.as_str())),
        )?;

        let mut builder = Self {
            config,
            settings,
            buttons: None,
        };
        builder.init_data_source(
            data_source_name,
            data_provider_class,
            data_provider_name,
            submit_url,
        )?;
        Ok(builder)
    }

    fn init_data_source(
        &mut self,
        data_source_name: &str,
        data_provider_class: &str,
        data_provider_name: &str,
        submit_url: &str,
    ) -> Result<()> {
        let mut data_source = Element::new("dataSource");
        data_source.set_attribute("name", data_source_name);
        assign_arguments(
            &mut data_source,
            &vec![arg(
                "data",
                ArgValue::map(vec![arg(
                    "js_config",
                    ArgValue::map(vec![arg(
                        "component",
                        ArgValue::str("Magento_Ui/js/form/provider"),
                    )]),
                )]),
            )],
            "argument",
        )?;

        let id = self.config.push_child(&NodeId::root(), data_source)?;
        self.config.assign(
            &id,
            &Spec::new()
                .child(
                    "settings",
                    Spec::new().child("submitUrl", Spec::new().attr("path", submit_url)),
                )
                .child(
                    "dataProvider",
                    Spec::new()
                        .attr("class", data_provider_class)
                        .attr("name", data_provider_name)
                        .child(
                            "settings",
                            Spec::new()
                                .child("requestFieldName", "id")
                                .child("primaryFieldName", "id"),
                        ),
                ),
        )
    }

    /// Add a toolbar button under `settings/buttons`, creating the
    /// `<buttons>` wrapper on first use.
    pub fn add_button(
        &mut self,
        name: &str,
        label: &str,
        class: &str,
        url: Option<&str>,
        acl_resource: Option<&str>,
        params: &Args,
    ) -> Result<()> {
        let buttons = match &self.buttons {
            Some(id) => id.clone(),
            None => {
                let id = self
                    .config
                    .push_child(&self.settings.clone(), Element::new("buttons"))?;
                self.buttons = Some(id.clone());
                id
            }
        };

        let mut button = Element::new("button");
        button.set_attribute("name", name);
        let id = self.config.push_child(&buttons, button)?;

        let mut spec = Spec::new().child("label", label).child("class", class);
        if let Some(url) = url {
            spec = spec.child("url", Spec::new().attr("path", url));
        }
        if let Some(acl) = acl_resource {
            spec = spec.child("aclResource", acl);
        }
        self.config.assign(&id, &spec)?;

        if !params.is_empty() {
            let node = self.config.node_mut(&id)?;
            assign_arguments(node, params, "param")?;
        }
        Ok(())
    }

    pub fn add_fieldset(&mut self, name: &str, label: Option<&str>) -> Result<NodeId> {
        let mut fieldset = Element::new("fieldset");
        fieldset.set_attribute("name", name);
        let id = self.config.push_child(&NodeId::root(), fieldset)?;
        self.config.assign(
            &id,
            &Spec::new().child(
                "settings",
                Spec::new().child("label", label.map(str::to_string)),
            ),
        )?;
        Ok(id)
    }

    pub fn add_field(
        &mut self,
        fieldset: &NodeId,
        name: &str,
        form_element: &str,
        settings: &Spec,
        arguments: &Args,
    ) -> Result<NodeId> {
        let mut field = Element::new("field");
        field.set_attribute("name", name);
        field.set_attribute("formElement", form_element);
        let id = self.config.push_child(fieldset, field)?;

        if !arguments.is_empty() {
            let node = self.config.node_mut(&id)?;
            assign_arguments(node, arguments, "argument")?;
        }
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
