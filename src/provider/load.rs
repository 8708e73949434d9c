//! Configuration assembly.

use crate::builders::EntityBuilder;
use crate::document::{Document, Grammar};
use crate::error::Result;
use crate::model::Configuration;
use crate::params::extract_params;

/// Populate `configuration` from `document`, read with `grammar`.
///
/// Sections are built in a fixed order: parameters, modules, plugins,
/// providers, merge policies, chains. A chain whose name is already taken
/// is skipped with a warning.
pub fn load_configuration(
    document: &Document,
    grammar: Grammar,
    configuration: &mut Configuration,
) -> Result<()> {
    let root = document.root();
    let builder = EntityBuilder::for_grammar(grammar);

    configuration.parameters = extract_params(Some(root));
    configuration.modules = builder.build_modules(root)?;
    configuration.plugins = builder.build_plugins(root)?;
    configuration.providers = builder.build_providers(root)?;
    configuration.merge_policies = builder.build_merge_policies(root);

    for chain in builder.build_chains(root)? {
        let name = chain.name.clone();
        if !configuration.add_chain_config(chain) {
            tracing::warn!("Transformation chain {} already exists, ignoring", name);
        }
    }

    tracing::debug!(
        "Configuration loaded: {} chains, {} plugins, {} merge policies",
        configuration.chains.len(),
        configuration.plugins.len(),
        configuration.merge_policies.len()
    );
    Ok(())
}
