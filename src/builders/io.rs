//! Reader and writer builders.

use super::{EXCLUDE, INCLUDE, READER, WRITER, optional_attr};
use crate::document::Element;
use crate::error::{ConfigError, Result};
use crate::model::{ReaderConfig, WriterConfig};
use crate::params::{PARAM, extract_params, render_params};

/// Attributes and children shared by `reader` and `writer`.
struct FileSet {
    path: String,
    type_name: Option<String>,
    includes: Option<Vec<String>>,
    excludes: Option<Vec<String>>,
}

fn read_file_set(element: &Element, kind: &str) -> Result<FileSet> {
    let path = element.attr_or_empty("path");
    if path.is_empty() {
        return Err(ConfigError::invalid(format!(
            "Invalid {} definition: A path attribute must be specified",
            kind
        )));
    }

    let mut includes = Vec::new();
    let mut excludes = Vec::new();
    for child in element.elements() {
        match child.name() {
            INCLUDE => includes.push(child.attr_or_empty("wildcard").to_string()),
            EXCLUDE => excludes.push(child.attr_or_empty("wildcard").to_string()),
            PARAM => {}
            other => {
                return Err(ConfigError::invalid(format!(
                    "Invalid {} definition. Only exclude or include tags are supported, found '{}'",
                    kind, other
                )));
            }
        }
    }

    Ok(FileSet {
        path: path.to_string(),
        type_name: optional_attr(element, "type"),
        includes: (!includes.is_empty()).then_some(includes),
        excludes: (!excludes.is_empty()).then_some(excludes),
    })
}

/// Build a [`ReaderConfig`] from an explicit `reader` element.
pub fn build_reader(element: &Element) -> Result<ReaderConfig> {
    let set = read_file_set(element, READER)?;
    Ok(ReaderConfig {
        path: Some(set.path),
        type_name: set.type_name,
        parameters: extract_params(Some(element)),
        includes: set.includes,
        excludes: set.excludes,
    })
}

/// Build a [`WriterConfig`] from an explicit `writer` element.
pub fn build_writer(element: &Element) -> Result<WriterConfig> {
    let set = read_file_set(element, WRITER)?;
    Ok(WriterConfig {
        path: Some(set.path),
        type_name: set.type_name,
        parameters: extract_params(Some(element)),
        includes: set.includes,
        excludes: set.excludes,
    })
}

fn render_file_set(
    kind: &str,
    path: &str,
    type_name: Option<&str>,
    params: &crate::params::Parameters,
    includes: Option<&[String]>,
    excludes: Option<&[String]>,
) -> Element {
    let mut element = Element::new(kind).with_attr("path", path);
    if let Some(type_name) = type_name {
        element.set_attr("type", type_name);
    }
    render_params(&mut element, params);
    for wildcard in includes.unwrap_or_default() {
        element.push_element(Element::new(INCLUDE).with_attr("wildcard", wildcard.as_str()));
    }
    for wildcard in excludes.unwrap_or_default() {
        element.push_element(Element::new(EXCLUDE).with_attr("wildcard", wildcard.as_str()));
    }
    element
}

/// Render a reader; a reader without a path is the implicit default and
/// renders as nothing.
pub fn render_reader(reader: &ReaderConfig) -> Option<Element> {
    let path = reader.path.as_deref().filter(|p| !p.is_empty())?;
    Some(render_file_set(
        READER,
        path,
        reader.type_name.as_deref(),
        &reader.parameters,
        reader.includes.as_deref(),
        reader.excludes.as_deref(),
    ))
}

/// Render a writer unless it is the default derived from `reader`.
pub fn render_writer(writer: &WriterConfig, reader: &ReaderConfig) -> Option<Element> {
    if writer.is_default_for(reader) {
        return None;
    }
    let path = writer.path.as_deref().filter(|p| !p.is_empty())?;
    Some(render_file_set(
        WRITER,
        path,
        writer.type_name.as_deref(),
        &writer.parameters,
        writer.includes.as_deref(),
        writer.excludes.as_deref(),
    ))
}
