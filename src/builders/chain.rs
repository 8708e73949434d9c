//! Chain assembly.
//!
//! A chain's non-param children are read as fixed zones in document order:
//!
//! 1. an optional `reader`;
//! 2. either a `walker` or bare `transformation` elements;
//! 3. an optional `writer`, searched for anywhere after zone 2.
//!
//! Bare transformations are collected from the whole chain, so a
//! transformation placed after the writer still runs. Any other element
//! after zone 2 is rejected.

use super::io::{build_reader, build_writer, render_reader, render_writer};
use super::walker::{build_transformations, render_walker};
use super::{
    CHAIN, EntityBuilder, READER, TRANSFORMATION, WALKER, WRITER, structural_children,
};
use crate::document::Element;
use crate::error::{ConfigError, Result};
use crate::model::{ChainConfig, ReaderConfig, WalkerConfig, WriterConfig};
use crate::params::{extract_params, render_params};

/// Name given to a chain without one, from its 0-based position.
pub(crate) fn default_chain_name(position: usize) -> String {
    format!("chain_{}", position + 1)
}

/// A chain declared directly under the root element.
enum ChainSlot<'a> {
    /// A `chain` element at its position among the root's element children.
    Declared(&'a Element, usize),
    /// A run of bare root-level `transformation` elements.
    Implicit(Vec<&'a Element>),
}

impl ChainSlot<'_> {
    fn name(&self) -> String {
        match self {
            ChainSlot::Declared(element, position) => chain_name(element, *position),
            ChainSlot::Implicit(_) => default_chain_name(0),
        }
    }
}

fn chain_name(element: &Element, position: usize) -> String {
    match element.non_blank_attr("name") {
        Some(name) => name.to_string(),
        None => default_chain_name(position),
    }
}

/// Every chain under the root, in document order.
fn chain_slots(root: &Element) -> Vec<ChainSlot<'_>> {
    let children: Vec<&Element> = root.elements().collect();
    let mut slots = Vec::new();
    let mut i = 0;

    while i < children.len() {
        match children[i].name() {
            CHAIN => {
                slots.push(ChainSlot::Declared(children[i], i));
                i += 1;
            }
            TRANSFORMATION => {
                let run = transformation_run(&children[i..]);
                i += run.len();
                slots.push(ChainSlot::Implicit(run));
            }
            _ => i += 1,
        }
    }

    slots
}

/// Names the loader gives to the chains under `root`, in document order.
pub(crate) fn declared_chain_names(root: &Element) -> Vec<String> {
    chain_slots(root).iter().map(ChainSlot::name).collect()
}

impl EntityBuilder {
    /// Build a [`ChainConfig`] from a `chain` element found at `position`
    /// among the root's element children.
    pub fn build_chain(&self, element: &Element, position: usize) -> Result<ChainConfig> {
        let name = chain_name(element, position);
        let children = structural_children(element);
        let mut index = 0;

        let reader_config = match children.first() {
            Some(reader) if reader.name() == READER => {
                index += 1;
                build_reader(reader)?
            }
            _ => ReaderConfig::default(),
        };

        let Some(zone) = children.get(index) else {
            return Err(ConfigError::invalid(format!(
                "Invalid chain definition for the element {}: a walker or at least one transformation must be specified",
                name
            )));
        };
        let (walker_config, bare) = match zone.name() {
            WALKER => {
                index += 1;
                (self.build_walker(zone, &name)?, false)
            }
            TRANSFORMATION => {
                let transformations = build_transformations(children[index..].iter().copied())?;
                (WalkerConfig::with_transformations(transformations), true)
            }
            _ => {
                return Err(ConfigError::invalid(format!(
                    "Invalid transformation chain {}. A walker or at least one transformation must be specified",
                    name
                )));
            }
        };

        let mut writer_config = None;
        for child in &children[index..] {
            match child.name() {
                TRANSFORMATION if bare => {}
                WRITER if writer_config.is_none() => writer_config = Some(build_writer(child)?),
                other => {
                    return Err(ConfigError::invalid(format!(
                        "Invalid chain definition for the element {}: unexpected element '{}'",
                        name, other
                    )));
                }
            }
        }
        let writer_config =
            writer_config.unwrap_or_else(|| WriterConfig::from_reader(&reader_config));

        Ok(ChainConfig {
            name,
            parameters: extract_params(Some(element)),
            reader_config,
            walker_config,
            writer_config,
        })
    }

    /// Build every chain declared under the root element, in document order.
    ///
    /// A run of bare `transformation` elements directly under the root forms
    /// one implicit chain named `chain_1`.
    pub fn build_chains(&self, root: &Element) -> Result<Vec<ChainConfig>> {
        chain_slots(root)
            .into_iter()
            .map(|slot| match slot {
                ChainSlot::Declared(element, position) => self.build_chain(element, position),
                ChainSlot::Implicit(run) => {
                    let walker_config =
                        WalkerConfig::with_transformations(build_transformations(run)?);
                    Ok(ChainConfig::new(
                        default_chain_name(0),
                        ReaderConfig::default(),
                        walker_config,
                    ))
                }
            })
            .collect()
    }
}

/// The consecutive `transformation` elements at the start of `elements`.
fn transformation_run<'a>(elements: &[&'a Element]) -> Vec<&'a Element> {
    elements
        .iter()
        .take_while(|e| e.name() == TRANSFORMATION)
        .copied()
        .collect()
}

/// Render a full `chain` element.
pub fn render_chain(chain: &ChainConfig) -> Result<Element> {
    let mut element = Element::new(CHAIN);
    let name = chain.name.trim();
    if !name.is_empty() {
        element.set_attr("name", name);
    }
    render_params(&mut element, &chain.parameters);

    if let Some(reader) = render_reader(&chain.reader_config) {
        element.push_element(reader);
    }
    for walker in render_walker(&chain.walker_config, &chain.name)? {
        element.push_element(walker);
    }
    if let Some(writer) = render_writer(&chain.writer_config, &chain.reader_config) {
        element.push_element(writer);
    }
    Ok(element)
}
