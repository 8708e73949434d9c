//! Document versions and DOCTYPE handling.

use crate::error::{ConfigError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Public identifier of the first document version.
pub const LEGACY_PUBLIC_ID: &str = "-//Chainconf//DTD Configuration 1.0//EN";

/// Public identifier of the current document version.
pub const CURRENT_PUBLIC_ID: &str = "-//Chainconf//DTD Configuration 1.1//EN";

static DOCTYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)^\s*([^\s\[>]+)(?:\s+(?:PUBLIC\s+["']([^"']*)["'](?:\s+["']([^"']*)["'])?|SYSTEM\s+["']([^"']*)["']))?"#,
    )
    .expect("Invalid DOCTYPE regex")
});

/// The closed set of document shapes a configuration can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grammar {
    /// Version 1.0: walkers wrap only `transformations`; no parser,
    /// modules or nested configuration providers.
    Legacy,
    /// Version 1.1: walkers may declare a `parser`; the root may declare
    /// `modules` and `conf-providers`.
    Current,
}

impl Grammar {
    pub fn public_id(self) -> &'static str {
        match self {
            Grammar::Legacy => LEGACY_PUBLIC_ID,
            Grammar::Current => CURRENT_PUBLIC_ID,
        }
    }

    /// Grammar file name the public identifier maps to.
    pub fn system_id(self) -> &'static str {
        match self {
            Grammar::Legacy => "chainconf-1.0.dtd",
            Grammar::Current => "chainconf-1.1.dtd",
        }
    }

    pub fn version(self) -> &'static str {
        match self {
            Grammar::Legacy => "1.0",
            Grammar::Current => "1.1",
        }
    }
}

/// A parsed `<!DOCTYPE ...>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocType {
    pub name: String,
    pub public_id: Option<String>,
    pub system_id: Option<String>,
}

impl DocType {
    /// The declaration written for documents of the given grammar.
    pub fn for_grammar(grammar: Grammar) -> Self {
        Self {
            name: super::ROOT_ELEMENT.to_string(),
            public_id: Some(grammar.public_id().to_string()),
            system_id: Some(grammar.system_id().to_string()),
        }
    }

    /// Parse the content between `<!DOCTYPE` and `>`.
    ///
    /// Unrecognized content keeps only the root name; an internal subset is
    /// ignored.
    pub fn parse(raw: &str) -> Self {
        match DOCTYPE_REGEX.captures(raw) {
            Some(caps) => Self {
                name: caps[1].to_string(),
                public_id: caps.get(2).map(|m| m.as_str().trim().to_string()),
                system_id: caps
                    .get(3)
                    .or_else(|| caps.get(4))
                    .map(|m| m.as_str().to_string()),
            },
            None => Self {
                name: raw.trim().to_string(),
                public_id: None,
                system_id: None,
            },
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match (&self.public_id, &self.system_id) {
            (Some(public), Some(system)) => write!(f, " PUBLIC \"{}\" \"{}\"", public, system),
            (Some(public), None) => write!(f, " PUBLIC \"{}\"", public),
            (None, Some(system)) => write!(f, " SYSTEM \"{}\"", system),
            (None, None) => Ok(()),
        }
    }
}

/// Recognized public identifiers and the grammar each one selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarMappings {
    by_public_id: BTreeMap<String, Grammar>,
}

impl Default for GrammarMappings {
    fn default() -> Self {
        let mut mappings = Self::empty();
        mappings.insert(LEGACY_PUBLIC_ID, Grammar::Legacy);
        mappings.insert(CURRENT_PUBLIC_ID, Grammar::Current);
        mappings
    }
}

impl GrammarMappings {
    /// Mappings that recognize no public identifier at all.
    pub fn empty() -> Self {
        Self {
            by_public_id: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, public_id: impl Into<String>, grammar: Grammar) {
        self.by_public_id.insert(public_id.into(), grammar);
    }

    pub fn get(&self, public_id: &str) -> Option<Grammar> {
        self.by_public_id.get(public_id).copied()
    }

    /// Select the grammar for a document's DOCTYPE.
    ///
    /// Documents without a DOCTYPE, or whose DOCTYPE has no public
    /// identifier, are read with [`Grammar::Current`].
    pub fn resolve(&self, doctype: Option<&DocType>) -> Result<Grammar> {
        let Some(public_id) = doctype.and_then(|d| d.public_id.as_deref()) else {
            return Ok(Grammar::Current);
        };
        self.get(public_id)
            .ok_or_else(|| ConfigError::UnsupportedVersion(public_id.to_string()))
    }
}
