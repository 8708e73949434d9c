//! Structured document access for configuration files.
//!
//! A configuration document is held as an owned element tree: element
//! names, attributes in document order, ordered children and trimmed text.
//! Whitespace-only text, comments and processing instructions are dropped
//! while parsing, so builders only ever see significant nodes.
//!
//! The DOCTYPE public identifier selects the [`Grammar`] the document is
//! read with. Rendering always emits the current grammar's DOCTYPE.

mod grammar;
mod node;
mod reader;
mod writer;

#[cfg(test)]
mod tests;

pub use grammar::{CURRENT_PUBLIC_ID, DocType, Grammar, GrammarMappings, LEGACY_PUBLIC_ID};
pub use node::{Element, Node};

use crate::error::{ConfigError, Result};

/// Name of the root element of every configuration document.
pub const ROOT_ELEMENT: &str = "configuration";

/// A parsed configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    doctype: Option<DocType>,
    root: Element,
}

impl Document {
    /// Create an empty `configuration` document using the current grammar.
    pub fn empty() -> Self {
        Self {
            doctype: Some(DocType::for_grammar(Grammar::Current)),
            root: Element::new(ROOT_ELEMENT),
        }
    }

    /// Parse a document from XML text.
    ///
    /// Fails with [`ConfigError::Malformed`] when the text is not
    /// well-formed or the root element is not `configuration`.
    pub fn parse(text: &str) -> Result<Self> {
        let (doctype, root) = reader::parse_tree(text)?;
        if root.name() != ROOT_ELEMENT {
            return Err(ConfigError::Malformed(format!(
                "expected root element '{}', found '{}'",
                ROOT_ELEMENT,
                root.name()
            )));
        }
        Ok(Self { doctype, root })
    }

    /// The DOCTYPE declaration, if the document had one.
    pub fn doctype(&self) -> Option<&DocType> {
        self.doctype.as_ref()
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Resolve the grammar this document must be read with.
    pub fn grammar(&self, mappings: &GrammarMappings) -> Result<Grammar> {
        mappings.resolve(self.doctype.as_ref())
    }

    /// Render the document as indented XML with the current DOCTYPE.
    pub fn to_xml_string(&self) -> Result<String> {
        writer::render(&self.root)
    }

    /// Mark the document as conforming to the current grammar.
    ///
    /// Called once the document has been rendered with the fixed DOCTYPE.
    pub(crate) fn upgrade_doctype(&mut self) {
        self.doctype = Some(DocType::for_grammar(Grammar::Current));
    }
}
