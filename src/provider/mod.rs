//! XML configuration provider.
//!
//! The provider locates the configuration document, parses it once into a
//! [`ProviderSession`], and from there:
//!
//! - `load` builds a [`Configuration`] from the document;
//! - `add_chain_config` / `add_plugin_config` insert rendered entities into
//!   the session's document and persist it.
//!
//! The document is owned by the session and is never re-read between
//! writer calls. Concurrent writers to the same file are not coordinated.

mod load;
mod source;
mod write;


pub use load::load_configuration;
pub use write::{insert_chain, insert_plugin};

use crate::document::{Document, Grammar, GrammarMappings};
use crate::error::{ConfigError, Result};
use crate::fs::atomic_write_file;
use crate::model::{ChainConfig, Configuration, PluginConfig};
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const DEFAULT_FILE_NAME: &str = "chainconf.xml";

/// Where to find the configuration document and how to read it.
#[derive(Debug, Clone)]
pub struct ProviderOptions {
    /// File name or path of the document.
    pub file_name: PathBuf,

    /// Fail when the document cannot be found, instead of skipping.
    pub error_if_missing: bool,

    /// Directories tried in order when `file_name` does not exist as given.
    pub search_paths: Vec<PathBuf>,

    /// Recognized DOCTYPE public identifiers.
    pub grammars: GrammarMappings,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME, true)
    }
}

impl ProviderOptions {
    pub fn new(file_name: impl Into<PathBuf>, error_if_missing: bool) -> Self {
        Self {
            file_name: file_name.into(),
            error_if_missing,
            search_paths: Vec::new(),
            grammars: GrammarMappings::default(),
        }
    }

    pub fn with_search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.push(dir.into());
        self
    }

    pub fn with_grammar_mappings(mut self, grammars: GrammarMappings) -> Self {
        self.grammars = grammars;
        self
    }
}

/// Opens configuration documents described by [`ProviderOptions`].
#[derive(Debug, Clone, Default)]
pub struct XmlConfigurationProvider {
    options: ProviderOptions,
}

impl XmlConfigurationProvider {
    pub fn new(options: ProviderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    /// Locate, read and parse the configuration document.
    ///
    /// Returns `Ok(None)` when the document does not exist and the options
    /// allow it to be missing.
    pub fn open(&self) -> Result<Option<ProviderSession>> {
        let Some(path) = source::locate(&self.options) else {
            let name = self.options.file_name.display().to_string();
            if self.options.error_if_missing {
                return Err(ConfigError::Missing(name));
            }
            tracing::info!(
                "Unable to locate configuration files of the name {}, skipping",
                name
            );
            return Ok(None);
        };

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let document = Document::parse(&text)?;
        let session = ProviderSession::new(path, document, &self.options.grammars)?;
        tracing::debug!(
            "Configuration parsed from {} (version {})",
            session.path.display(),
            session.grammar.version()
        );
        Ok(Some(session))
    }

    /// Open the document and build its configuration in one step.
    pub fn load(&self) -> Result<Option<Configuration>> {
        self.open()?.map(|session| session.configuration()).transpose()
    }
}

/// A parsed document bound to the file it persists to.
#[derive(Debug, Clone)]
pub struct ProviderSession {
    path: PathBuf,
    document: Document,
    grammar: Grammar,
}

impl ProviderSession {
    /// Bind an already parsed document to `path`.
    pub fn new(path: impl Into<PathBuf>, document: Document, grammars: &GrammarMappings) -> Result<Self> {
        let grammar = document.grammar(grammars)?;
        Ok(Self {
            path: path.into(),
            document,
            grammar,
        })
    }

    /// Start an empty document that will be written to `path`.
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: Document::empty(),
            grammar: Grammar::Current,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Populate `configuration` from the session's document.
    pub fn load(&self, configuration: &mut Configuration) -> Result<()> {
        load_configuration(&self.document, self.grammar, configuration)
    }

    /// Build a fresh [`Configuration`] from the session's document.
    pub fn configuration(&self) -> Result<Configuration> {
        let mut configuration = Configuration::default();
        self.load(&mut configuration)?;
        Ok(configuration)
    }

    /// Append `chain` to the document and persist it.
    ///
    /// Returns `false` without touching the document or the file when a
    /// chain with the same name is already declared. When persisting fails
    /// the session's document is left as it was.
    pub fn add_chain_config(&mut self, chain: &ChainConfig) -> Result<bool> {
        let mut document = self.document.clone();
        if !insert_chain(&mut document, chain)? {
            return Ok(false);
        }
        self.commit(document)?;
        Ok(true)
    }

    /// Insert `plugin` into the document and persist it.
    ///
    /// Returns `false` without touching the document or the file when the
    /// same group and artifact are already declared. When persisting fails
    /// the session's document is left as it was.
    pub fn add_plugin_config(&mut self, plugin: &PluginConfig) -> Result<bool> {
        let mut document = self.document.clone();
        if !insert_plugin(&mut document, plugin) {
            return Ok(false);
        }
        self.commit(document)?;
        Ok(true)
    }

    /// Persist `document` and adopt it only once it is on disk.
    fn commit(&mut self, document: Document) -> Result<()> {
        let previous = std::mem::replace(&mut self.document, document);
        if let Err(err) = self.persist() {
            self.document = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Write the document to the session's path.
    ///
    /// The document is always written with the current DOCTYPE, so the
    /// session reads it with the current grammar afterwards.
    pub fn persist(&mut self) -> Result<()> {
        let xml = self.document.to_xml_string()?;
        atomic_write_file(&self.path, &xml)?;
        self.document.upgrade_doctype();
        self.grammar = Grammar::Current;
        tracing::debug!("Configuration written to {}", self.path.display());
        Ok(())
    }
}
