//! Chain configuration.

use super::{Parameters, ReaderConfig, WalkerConfig, WriterConfig};
use serde::{Deserialize, Serialize};

/// One named pipeline: read, walk and transform, write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub name: String,
    #[serde(default)]
    pub parameters: Parameters,
    pub reader_config: ReaderConfig,
    pub walker_config: WalkerConfig,
    pub writer_config: WriterConfig,
}

impl ChainConfig {
    /// Create a chain whose writer defaults to the reader's path.
    pub fn new(name: impl Into<String>, reader_config: ReaderConfig, walker_config: WalkerConfig) -> Self {
        let writer_config = WriterConfig::from_reader(&reader_config);
        Self {
            name: name.into(),
            parameters: Parameters::new(),
            reader_config,
            walker_config,
            writer_config,
        }
    }

    pub fn with_writer(mut self, writer_config: WriterConfig) -> Self {
        self.writer_config = writer_config;
        self
    }
}
