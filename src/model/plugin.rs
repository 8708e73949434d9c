//! Plugin and nested provider configuration.

use super::Parameters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinates of an external artifact supplying implementations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl PluginConfig {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Same group and artifact, whatever the version.
    pub fn same_artifact(&self, other: &PluginConfig) -> bool {
        self.group_id == other.group_id && self.artifact_id == other.artifact_id
    }
}

impl fmt::Display for PluginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A nested configuration source resolved by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    #[serde(rename = "type")]
    pub type_name: String,
    pub parameters: Parameters,
}
