//! Declarative transformation-chain configuration.
//!
//! A configuration document declares named chains (read, walk and
//! transform, write), the plugins supplying their implementations, merge
//! policies, nested providers and modules. This crate parses such a
//! document into a [`model::Configuration`], validating its structure, and
//! writes new chains and plugins back into it without duplicating entries.
//!
//! ```no_run
//! use chainconf::provider::{ProviderOptions, XmlConfigurationProvider};
//!
//! let provider = XmlConfigurationProvider::new(ProviderOptions::new("chainconf.xml", true));
//! if let Some(configuration) = provider.load()? {
//!     for chain in configuration.chain_configs() {
//!         println!("{}", chain.name);
//!     }
//! }
//! # Ok::<(), chainconf::error::ConfigError>(())
//! ```

pub mod builders;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod model;
pub mod params;
pub mod provider;
pub mod registry;

#[cfg(test)]
mod test_support;
