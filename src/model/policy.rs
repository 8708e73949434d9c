//! Merge policy configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named set of rules for combining transformation results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePolicyConfig {
    pub name: String,
    pub default_object_policy: Option<String>,
    pub default_type_policy: Option<String>,
    /// Object type to policy type.
    pub policy_entries: BTreeMap<String, String>,
}

impl MergePolicyConfig {
    /// Policy type for `object_type`, falling back to the default type policy.
    pub fn policy_for(&self, object_type: &str) -> Option<&str> {
        self.policy_entries
            .get(object_type)
            .map(String::as_str)
            .or(self.default_type_policy.as_deref())
    }
}
