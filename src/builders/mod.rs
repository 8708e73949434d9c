//! Entity builders.
//!
//! Each builder turns one element (and its children) into a populated
//! entity, applying defaults and rejecting structurally invalid input. The
//! matching `render_*` functions go the other way and produce elements the
//! builders read back unchanged.
//!
//! Builders are bound to the [`Grammar`] of the document once, through
//! [`EntityBuilder::for_grammar`]; the legacy and current shapes only differ
//! in what a `walker` may contain and which top-level sections exist.

mod chain;
mod io;
mod plugin;
mod policy;
mod walker;


pub use chain::render_chain;
pub(crate) use chain::{declared_chain_names, default_chain_name};
pub use io::{build_reader, build_writer, render_reader, render_writer};
pub use plugin::{build_plugin, render_plugin};
pub use walker::{build_transformation, render_walker};

use crate::document::{Element, Grammar};

pub(crate) const CHAIN: &str = "chain";
pub(crate) const READER: &str = "reader";
pub(crate) const WRITER: &str = "writer";
pub(crate) const WALKER: &str = "walker";
pub(crate) const PARSER: &str = "parser";
pub(crate) const TRANSFORMATIONS: &str = "transformations";
pub(crate) const TRANSFORMATION: &str = "transformation";
pub(crate) const INCLUDE: &str = "include";
pub(crate) const EXCLUDE: &str = "exclude";
pub(crate) const MERGE_POLICIES: &str = "merge-policies";
pub(crate) const POLICY: &str = "policy";
pub(crate) const POLICY_ENTRY: &str = "policy-entry";
pub(crate) const PLUGINS: &str = "plugins";
pub(crate) const PLUGIN: &str = "plugin";
pub(crate) const CONF_PROVIDERS: &str = "conf-providers";
pub(crate) const CONF_PROVIDER: &str = "conf-provider";
pub(crate) const MODULES: &str = "modules";
pub(crate) const MODULE: &str = "module";

/// Builders for the elements of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityBuilder {
    grammar: Grammar,
}

impl EntityBuilder {
    pub fn for_grammar(grammar: Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }
}

/// Child elements that are not `param` entries.
pub(crate) fn structural_children(element: &Element) -> Vec<&Element> {
    element
        .elements()
        .filter(|e| e.name() != crate::params::PARAM)
        .collect()
}

/// Attribute value, `None` when absent or empty.
pub(crate) fn optional_attr(element: &Element, key: &str) -> Option<String> {
    element
        .attr(key)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
