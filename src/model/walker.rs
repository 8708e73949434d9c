//! Walker, parser and transformation configuration.

use super::Parameters;
use serde::{Deserialize, Serialize};

/// How a chain visits the artifacts produced by its reader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Implementation name; `None` selects the host's default walker.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub params: Parameters,
    pub root_namespace: String,
    pub parser_config: Option<ParserConfig>,
    /// Transformations in execution order.
    pub transformations: Vec<TransformationConfig>,
}

impl WalkerConfig {
    /// A default walker applying `transformations`.
    pub fn with_transformations(transformations: Vec<TransformationConfig>) -> Self {
        Self {
            transformations,
            ..Self::default()
        }
    }

    /// Whether the walker can be written as bare `transformation` elements
    /// without losing anything.
    pub fn is_implicit(&self) -> bool {
        self.type_name.is_none()
            && self.params.is_empty()
            && self.root_namespace.is_empty()
            && self.parser_config.as_ref().is_none_or(ParserConfig::is_empty)
    }
}

/// Parser used by a walker to turn artifacts into visitable trees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub parameters: Parameters,
}

impl ParserConfig {
    pub fn is_empty(&self) -> bool {
        self.type_name.is_none() && self.parameters.is_empty()
    }
}

/// One typed unit of change applied during a walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default)]
    pub is_mergeable: bool,
    #[serde(default)]
    pub merge_policy: Option<String>,
}

impl TransformationConfig {
    /// A transformation named after its type.
    pub fn new(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            name: type_name.clone(),
            type_name,
            parameters: Parameters::new(),
            is_mergeable: false,
            merge_policy: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach a merge policy; this always makes the transformation mergeable.
    pub fn with_merge_policy(mut self, policy: impl Into<String>) -> Self {
        self.is_mergeable = true;
        self.merge_policy = Some(policy.into());
        self
    }
}
