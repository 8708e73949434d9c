//! Inserting rendered entities into a document.

use crate::builders::{
    PLUGIN, PLUGINS, declared_chain_names, default_chain_name, render_chain, render_plugin,
};
use crate::document::{Document, Element};
use crate::error::Result;
use crate::model::{ChainConfig, PluginConfig};

/// Append a rendered `chain` to the document root.
///
/// Returns `false` when the chain would load under a name already taken,
/// counting the generated names of unnamed chains and of a root-level
/// transformation run. The document is left untouched in that case.
pub fn insert_chain(document: &mut Document, chain: &ChainConfig) -> Result<bool> {
    let root = document.root_mut();
    let name = match chain.name.trim() {
        "" => default_chain_name(root.elements().count()),
        name => name.to_string(),
    };
    if declared_chain_names(root).contains(&name) {
        return Ok(false);
    }

    root.push_element(render_chain(chain)?);
    Ok(true)
}

/// Insert a rendered `plugin` into the document.
///
/// The plugin becomes the first child of the existing `plugins` element;
/// without one, a new `plugins` element is appended to the root. Returns
/// `false` when the same group and artifact are already declared.
pub fn insert_plugin(document: &mut Document, plugin: &PluginConfig) -> bool {
    let root = document.root_mut();
    match root.find_mut(PLUGINS) {
        Some(plugins) => {
            if plugins.elements().any(|e| is_same_plugin(e, plugin)) {
                return false;
            }
            plugins.prepend_element(render_plugin(plugin));
        }
        None => root.push_element(Element::new(PLUGINS).with_child(render_plugin(plugin))),
    }
    true
}

fn is_same_plugin(element: &Element, plugin: &PluginConfig) -> bool {
    element.name() == PLUGIN
        && element.attr_or_empty("groupId") == plugin.group_id
        && element.attr_or_empty("artifactId") == plugin.artifact_id
}
