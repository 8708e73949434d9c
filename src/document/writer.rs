//! Element tree to indented XML text.

use super::grammar::{DocType, Grammar};
use super::node::{Element, Node};
use crate::error::{ConfigError, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Indentation width of persisted documents.
const INDENT: usize = 4;

/// Render `root` as a complete document with the current DOCTYPE.
pub(super) fn render(root: &Element) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    let doctype = DocType::for_grammar(Grammar::Current).to_string();
    emit(&mut writer, Event::DocType(BytesText::from_escaped(doctype)))?;
    write_element(&mut writer, root)?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| ConfigError::Persist(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }

    if element.children().is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for child in element.children() {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => emit(writer, Event::Text(BytesText::new(text)))?,
        }
    }
    emit(writer, Event::End(BytesEnd::new(element.name())))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| ConfigError::Persist(e.to_string()))
}
