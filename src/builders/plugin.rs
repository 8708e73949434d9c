//! Plugin, provider and module builders.

use super::{
    CONF_PROVIDER, CONF_PROVIDERS, EntityBuilder, MODULE, MODULES, PLUGIN, PLUGINS,
};
use crate::document::{Element, Grammar};
use crate::error::{ConfigError, Result};
use crate::model::{PluginConfig, ProviderConfig};
use crate::params::extract_params;

impl EntityBuilder {
    /// Build every plugin of every `plugins` section under the root.
    pub fn build_plugins(&self, root: &Element) -> Result<Vec<PluginConfig>> {
        root.elements()
            .filter(|e| e.name() == PLUGINS)
            .flat_map(|section| section.elements().filter(|e| e.name() == PLUGIN))
            .map(build_plugin)
            .collect()
    }

    /// Build every nested provider of every `conf-providers` section.
    pub fn build_providers(&self, root: &Element) -> Result<Vec<ProviderConfig>> {
        self.reject_unsupported(root, CONF_PROVIDERS)?;
        root.elements()
            .filter(|e| e.name() == CONF_PROVIDERS)
            .flat_map(|section| section.elements().filter(|e| e.name() == CONF_PROVIDER))
            .map(build_provider)
            .collect()
    }

    /// Collect the text of every `module` of every `modules` section.
    pub fn build_modules(&self, root: &Element) -> Result<Vec<String>> {
        self.reject_unsupported(root, MODULES)?;
        Ok(root
            .elements()
            .filter(|e| e.name() == MODULES)
            .flat_map(|section| section.elements().filter(|e| e.name() == MODULE))
            .map(Element::text)
            .filter(|module| !module.is_empty())
            .collect())
    }

    fn reject_unsupported(&self, root: &Element, section: &str) -> Result<()> {
        if self.grammar == Grammar::Legacy && root.find(section).is_some() {
            return Err(ConfigError::invalid(format!(
                "The {} element is not supported by configuration version {}",
                section,
                self.grammar.version()
            )));
        }
        Ok(())
    }
}

/// Build a [`PluginConfig`] from a `plugin` element.
pub fn build_plugin(element: &Element) -> Result<PluginConfig> {
    let required = |key: &str| {
        element
            .non_blank_attr(key)
            .map(str::to_string)
            .ok_or_else(|| {
                ConfigError::invalid(format!(
                    "Invalid plugin definition. A {} is necessary.",
                    key
                ))
            })
    };
    Ok(PluginConfig {
        group_id: required("groupId")?,
        artifact_id: required("artifactId")?,
        version: required("version")?,
    })
}

fn build_provider(element: &Element) -> Result<ProviderConfig> {
    let type_name = element.non_blank_attr("type").ok_or_else(|| {
        ConfigError::invalid(
            "Invalid conf-provider definition: A type attribute must be specified",
        )
    })?;
    Ok(ProviderConfig {
        type_name: type_name.to_string(),
        parameters: extract_params(Some(element)),
    })
}

pub fn render_plugin(plugin: &PluginConfig) -> Element {
    Element::new(PLUGIN)
        .with_attr("groupId", plugin.group_id.as_str())
        .with_attr("artifactId", plugin.artifact_id.as_str())
        .with_attr("version", plugin.version.as_str())
}
