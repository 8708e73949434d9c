//! XML text to element tree.

use super::grammar::DocType;
use super::node::Element;
use crate::error::{ConfigError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse XML text into its DOCTYPE (if any) and root element.
pub(super) fn parse_tree(text: &str) -> Result<(Option<DocType>, Element)> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut doctype = None;
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            ConfigError::Malformed(format!(
                "error at position {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(start) => stack.push(open_element(&start)?),
            Event::Empty(start) => {
                let element = open_element(&start)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ConfigError::Malformed("unexpected closing tag".to_string()))?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let value = text
                    .unescape()
                    .map_err(|e| ConfigError::Malformed(e.to_string()))?;
                push_text(&mut stack, &value)?;
            }
            Event::CData(data) => {
                let value = String::from_utf8_lossy(&data.into_inner()).into_owned();
                push_text(&mut stack, &value)?;
            }
            Event::DocType(raw) => {
                doctype = Some(DocType::parse(&String::from_utf8_lossy(&raw)));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(ConfigError::Malformed(
            "unexpected end of document".to_string(),
        ));
    }
    let root = root.ok_or_else(|| ConfigError::Malformed("document has no root element".to_string()))?;
    Ok((doctype, root))
}

fn open_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| ConfigError::Malformed(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        element.set_attr(key, value.into_owned());
    }
    Ok(element)
}

fn close_element(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_element(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(ConfigError::Malformed(format!(
            "unexpected element '{}' after the root element",
            element.name()
        ))),
    }
}

fn push_text(stack: &mut [Element], text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(parent) => {
            parent.push_text(text);
            Ok(())
        }
        None => Err(ConfigError::Malformed(
            "text content outside the root element".to_string(),
        )),
    }
}
