//! The configuration aggregate.

use super::{ChainConfig, MergePolicyConfig, Parameters, PluginConfig, ProviderConfig};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language assumed for transformations that do not declare one.
pub const DEFAULT_LANGUAGE: &str = "java";

/// Everything declared by one configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Global parameters declared directly under the root element.
    pub parameters: Parameters,

    /// Transformation chains keyed by their unique name.
    pub chains: BTreeMap<String, ChainConfig>,

    /// Plugin coordinates the host should load.
    pub plugins: Vec<PluginConfig>,

    /// Named merge policies transformations may refer to.
    pub merge_policies: Vec<MergePolicyConfig>,

    /// Nested configuration sources.
    pub providers: Vec<ProviderConfig>,

    /// Module directories the host should also process.
    pub modules: Vec<String>,

    pub default_language: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            parameters: Parameters::new(),
            chains: BTreeMap::new(),
            plugins: Vec::new(),
            merge_policies: Vec::new(),
            providers: Vec::new(),
            modules: Vec::new(),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Configuration {
    /// Add a chain unless one with the same name already exists.
    ///
    /// Returns `false` (leaving the existing chain untouched) when the name
    /// is taken.
    pub fn add_chain_config(&mut self, chain: ChainConfig) -> bool {
        if self.chains.contains_key(&chain.name) {
            return false;
        }
        self.chains.insert(chain.name.clone(), chain);
        true
    }

    /// Replace every chain with `chains`.
    ///
    /// Later chains with a name already seen are dropped.
    pub fn set_chain_configs(&mut self, chains: impl IntoIterator<Item = ChainConfig>) {
        self.chains.clear();
        for chain in chains {
            self.add_chain_config(chain);
        }
    }

    pub fn chain_config(&self, name: &str) -> Option<&ChainConfig> {
        self.chains.get(name)
    }

    pub fn chain_configs(&self) -> impl Iterator<Item = &ChainConfig> {
        self.chains.values()
    }

    pub fn merge_policy(&self, name: &str) -> Option<&MergePolicyConfig> {
        self.merge_policies.iter().find(|p| p.name == name)
    }

    /// Find a plugin by its group and artifact, ignoring the version.
    pub fn plugin(&self, group_id: &str, artifact_id: &str) -> Option<&PluginConfig> {
        self.plugins
            .iter()
            .find(|p| p.group_id == group_id && p.artifact_id == artifact_id)
    }

    /// Serialize the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Persist(format!("failed to serialize configuration to YAML: {}", e)))
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Persist(format!("failed to serialize configuration to JSON: {}", e)))
    }
}
