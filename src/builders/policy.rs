//! Merge policy builder.

use super::{EntityBuilder, MERGE_POLICIES, POLICY, POLICY_ENTRY};
use crate::document::Element;
use crate::model::MergePolicyConfig;
use std::collections::BTreeMap;

impl EntityBuilder {
    /// Build the policies of every `merge-policies` section under the root.
    ///
    /// Entries missing either side of the mapping are dropped.
    pub fn build_merge_policies(&self, root: &Element) -> Vec<MergePolicyConfig> {
        root.elements()
            .filter(|e| e.name() == MERGE_POLICIES)
            .flat_map(|section| section.elements().filter(|e| e.name() == POLICY))
            .map(build_merge_policy)
            .collect()
    }
}

fn build_merge_policy(element: &Element) -> MergePolicyConfig {
    let mut policy_entries = BTreeMap::new();
    for entry in element.elements().filter(|e| e.name() == POLICY_ENTRY) {
        if let (Some(object_type), Some(policy_type)) = (
            entry.non_blank_attr("object-type"),
            entry.non_blank_attr("policy-type"),
        ) {
            policy_entries.insert(object_type.to_string(), policy_type.to_string());
        }
    }

    MergePolicyConfig {
        name: element.attr_or_empty("name").to_string(),
        default_object_policy: element.non_blank_attr("default-object-policy").map(str::to_string),
        default_type_policy: element.non_blank_attr("default-type-policy").map(str::to_string),
        policy_entries,
    }
}
