//! Configuration entities.
//!
//! All entities are plain records owned by a [`Configuration`]. A chain does
//! not point back at its configuration; operations that need both take the
//! configuration explicitly.

mod chain;
mod configuration;
mod io;
mod plugin;
mod policy;
mod walker;


pub use crate::params::Parameters;
pub use chain::ChainConfig;
pub use configuration::{Configuration, DEFAULT_LANGUAGE};
pub use io::{FileFilter, ReaderConfig, WriterConfig};
pub use plugin::{PluginConfig, ProviderConfig};
pub use policy::MergePolicyConfig;
pub use walker::{ParserConfig, TransformationConfig, WalkerConfig};
