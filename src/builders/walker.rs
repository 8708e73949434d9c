//! Walker, parser and transformation builders.

use super::{
    EntityBuilder, PARSER, TRANSFORMATION, TRANSFORMATIONS, WALKER, optional_attr,
    structural_children,
};
use crate::document::{Element, Grammar};
use crate::error::{ConfigError, Result};
use crate::model::{ParserConfig, TransformationConfig, WalkerConfig};
use crate::params::{extract_params, render_params};

impl EntityBuilder {
    /// Build a [`WalkerConfig`] from an explicit `walker` element.
    ///
    /// The walker's non-param children are an optional `parser` (current
    /// grammar only) followed by a mandatory `transformations` element.
    pub fn build_walker(&self, element: &Element, chain_name: &str) -> Result<WalkerConfig> {
        let mut walker = WalkerConfig {
            type_name: optional_attr(element, "type"),
            params: extract_params(Some(element)),
            root_namespace: element.attr_or_empty("root-namespace").to_string(),
            ..WalkerConfig::default()
        };

        let children = structural_children(element);
        let max_children = match self.grammar {
            Grammar::Legacy => 1,
            Grammar::Current => 2,
        };
        if children.len() > max_children {
            return Err(ConfigError::invalid(format!(
                "Invalid walker definition in the chain {}. Please, verify the dtd",
                chain_name
            )));
        }

        let mut index = 0;
        if self.grammar == Grammar::Current {
            walker.parser_config = Some(match children.first() {
                Some(parser) if parser.name() == PARSER => {
                    index += 1;
                    build_parser(parser)
                }
                _ => ParserConfig::default(),
            });
        } else if children.first().is_some_and(|c| c.name() == PARSER) {
            return Err(ConfigError::invalid(format!(
                "Invalid walker definition in the chain {}. The parser element is not supported by configuration version {}",
                chain_name,
                self.grammar.version()
            )));
        }

        match children.get(index) {
            Some(transformations) if transformations.name() == TRANSFORMATIONS => {
                if let Some(extra) = children.get(index + 1) {
                    return Err(ConfigError::invalid(format!(
                        "Invalid walker definition in the chain {}. Unexpected element '{}' after \"transformations\"",
                        chain_name,
                        extra.name()
                    )));
                }
                walker.transformations = build_transformations(transformations.elements())?;
            }
            _ => {
                return Err(ConfigError::invalid(
                    "Invalid walker definition. A walker element must contain a \"transformations\" element",
                ));
            }
        }

        Ok(walker)
    }
}

/// Build a [`ParserConfig`] from a `parser` element.
pub(crate) fn build_parser(element: &Element) -> ParserConfig {
    ParserConfig {
        type_name: optional_attr(element, "type"),
        parameters: extract_params(Some(element)),
    }
}

/// Build every `transformation` among `elements`, keeping their order.
///
/// Elements with another name are skipped.
pub(crate) fn build_transformations<'a>(
    elements: impl IntoIterator<Item = &'a Element>,
) -> Result<Vec<TransformationConfig>> {
    elements
        .into_iter()
        .filter(|e| e.name() == TRANSFORMATION)
        .map(build_transformation)
        .collect()
}

/// Build a [`TransformationConfig`] from a `transformation` element.
pub fn build_transformation(element: &Element) -> Result<TransformationConfig> {
    let type_name = element.attr_or_empty("type").trim();
    if type_name.is_empty() {
        return Err(ConfigError::invalid(
            "Invalid transformation definition: A type attribute must be specified",
        ));
    }

    let name = match element.non_blank_attr("name") {
        Some(name) => name.to_string(),
        None => type_name.to_string(),
    };

    let mut transformation = TransformationConfig {
        name,
        type_name: type_name.to_string(),
        parameters: extract_params(Some(element)),
        is_mergeable: false,
        merge_policy: None,
    };

    if let Some(mergeable) = element.non_blank_attr("isMergeable") {
        transformation.is_mergeable = mergeable.eq_ignore_ascii_case("true");
    }
    if let Some(policy) = element.non_blank_attr("merge-policy") {
        transformation.is_mergeable = true;
        transformation.merge_policy = Some(policy.to_string());
    }

    Ok(transformation)
}

pub(crate) fn render_transformation(transformation: &TransformationConfig) -> Element {
    let mut element = Element::new(TRANSFORMATION).with_attr("type", transformation.type_name.as_str());
    if !transformation.name.is_empty() && transformation.name != transformation.type_name {
        element.set_attr("name", transformation.name.as_str());
    }
    match &transformation.merge_policy {
        Some(policy) => element.set_attr("merge-policy", policy.as_str()),
        None if transformation.is_mergeable => element.set_attr("isMergeable", "true"),
        None => {}
    }
    render_params(&mut element, &transformation.parameters);
    element
}

/// Render a walker as the elements that go into a `chain`.
///
/// A walker carrying nothing but transformations renders as bare
/// `transformation` elements; anything else gets an explicit `walker`.
pub fn render_walker(walker: &WalkerConfig, chain_name: &str) -> Result<Vec<Element>> {
    if walker.transformations.is_empty() {
        return Err(ConfigError::invalid(format!(
            "Invalid transformation chain {}. A walker or at least one transformation must be specified",
            chain_name
        )));
    }

    let transformations: Vec<Element> = walker
        .transformations
        .iter()
        .map(render_transformation)
        .collect();
    if walker.is_implicit() {
        return Ok(transformations);
    }

    let mut element = Element::new(WALKER);
    if let Some(type_name) = &walker.type_name {
        element.set_attr("type", type_name.as_str());
    }
    if !walker.root_namespace.is_empty() {
        element.set_attr("root-namespace", walker.root_namespace.as_str());
    }
    render_params(&mut element, &walker.params);

    if let Some(parser) = walker.parser_config.as_ref().filter(|p| !p.is_empty()) {
        let mut parser_element = Element::new(PARSER);
        if let Some(type_name) = &parser.type_name {
            parser_element.set_attr("type", type_name.as_str());
        }
        render_params(&mut parser_element, &parser.parameters);
        element.push_element(parser_element);
    }

    let mut wrapper = Element::new(TRANSFORMATIONS);
    for transformation in transformations {
        wrapper.push_element(transformation);
    }
    element.push_element(wrapper);
    Ok(vec![element])
}
