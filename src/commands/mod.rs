//! Command implementations for chainconf.
//!
//! Every command opens the configuration file named on the command line
//! through the XML provider; write commands persist through the same
//! session.

use crate::cli::{AddChainArgs, AddPluginArgs, Command, OutputFormat, ShowArgs};
use chainconf::error::Result;
use chainconf::model::{
    ChainConfig, Configuration, PluginConfig, ReaderConfig, TransformationConfig, WalkerConfig,
    WriterConfig,
};
use chainconf::provider::{ProviderOptions, ProviderSession, XmlConfigurationProvider};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(config_path: &Path, command: Command) -> Result<()> {
    match command {
        Command::Init => cmd_init(config_path),
        Command::Show(args) => cmd_show(config_path, args),
        Command::Check => cmd_check(config_path),
        Command::AddChain(args) => cmd_add_chain(config_path, args),
        Command::AddPlugin(args) => cmd_add_plugin(config_path, args),
    }
}

/// Open the configuration file, failing if it does not exist.
fn open_session(config_path: &Path) -> Result<ProviderSession> {
    let provider = XmlConfigurationProvider::new(ProviderOptions::new(config_path, true));
    match provider.open()? {
        Some(session) => Ok(session),
        None => Err(chainconf::error::ConfigError::Missing(
            config_path.display().to_string(),
        )),
    }
}

fn cmd_init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("{} already exists", config_path.display());
        return Ok(());
    }
    ProviderSession::create(config_path).persist()?;
    println!("Created {}", config_path.display());
    Ok(())
}

fn cmd_show(config_path: &Path, args: ShowArgs) -> Result<()> {
    let configuration = open_session(config_path)?.configuration()?;
    print!("{}", render_configuration(&configuration, args.format)?);
    Ok(())
}

fn render_configuration(configuration: &Configuration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => configuration.to_yaml(),
        OutputFormat::Json => configuration.to_json().map(|json| json + "\n"),
    }
}

fn cmd_check(config_path: &Path) -> Result<()> {
    let configuration = open_session(config_path)?.configuration()?;
    println!("{}", summarize(&configuration));
    Ok(())
}

fn summarize(configuration: &Configuration) -> String {
    let transformations: usize = configuration
        .chain_configs()
        .map(|c| c.walker_config.transformations.len())
        .sum();
    format!(
        "OK: {} chains, {} transformations, {} plugins, {} merge policies, {} providers",
        configuration.chains.len(),
        transformations,
        configuration.plugins.len(),
        configuration.merge_policies.len(),
        configuration.providers.len()
    )
}

fn chain_from_args(args: AddChainArgs) -> ChainConfig {
    let reader_config = match args.reader_path {
        Some(path) => ReaderConfig::with_path(path),
        None => ReaderConfig::default(),
    };
    let walker_config = WalkerConfig::with_transformations(
        args.transformations
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(TransformationConfig::new)
            .collect(),
    );
    let chain = ChainConfig::new(args.name.unwrap_or_default(), reader_config, walker_config);
    match args.writer_path {
        Some(path) => chain.with_writer(WriterConfig::with_path(path)),
        None => chain,
    }
}

fn cmd_add_chain(config_path: &Path, args: AddChainArgs) -> Result<()> {
    let mut session = open_session(config_path)?;
    let chain = chain_from_args(args);
    if session.add_chain_config(&chain)? {
        println!("Added chain '{}' to {}", chain.name, config_path.display());
    } else {
        println!("Chain '{}' already exists; nothing to do", chain.name);
    }
    Ok(())
}

fn cmd_add_plugin(config_path: &Path, args: AddPluginArgs) -> Result<()> {
    let mut session = open_session(config_path)?;
    let plugin = PluginConfig::new(args.group_id, args.artifact_id, args.plugin_version);
    if session.add_plugin_config(&plugin)? {
        println!("Added plugin {} to {}", plugin, config_path.display());
    } else {
        println!(
            "Plugin {}:{} already exists; nothing to do",
            plugin.group_id, plugin.artifact_id
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainconf::error::ConfigError;
    use tempfile::TempDir;

    fn add_chain_args(name: &str, transformations: &[&str]) -> AddChainArgs {
        AddChainArgs {
            name: Some(name.to_string()),
            reader_path: Some("src".to_string()),
            writer_path: None,
            transformations: transformations.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_init_then_add_chain_and_plugin() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chainconf.xml");

        dispatch(&path, Command::Init).unwrap();
        assert!(path.exists());

        dispatch(&path, Command::AddChain(add_chain_args("cleanup", &["imports-cleaner"]))).unwrap();
        dispatch(
            &path,
            Command::AddPlugin(AddPluginArgs {
                group_id: "org.example".to_string(),
                artifact_id: "formatter".to_string(),
                plugin_version: "1.0".to_string(),
            }),
        )
        .unwrap();

        let configuration = open_session(&path).unwrap().configuration().unwrap();
        let chain = configuration.chain_config("cleanup").unwrap();
        assert_eq!(chain.reader_config.path.as_deref(), Some("src"));
        assert_eq!(chain.writer_config.path.as_deref(), Some("src"));
        assert_eq!(chain.walker_config.transformations[0].type_name, "imports-cleaner");
        assert_eq!(configuration.plugins.len(), 1);
        assert_eq!(summarize(&configuration), "OK: 1 chains, 1 transformations, 1 plugins, 0 merge policies, 0 providers");
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chainconf.xml");
        std::fs::write(&path, "<configuration><param name=\"k\">v</param></configuration>").unwrap();

        dispatch(&path, Command::Init).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<param name=\"k\">v</param>"));
    }

    #[test]
    fn test_commands_on_missing_file_fail() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.xml");

        let err = dispatch(&path, Command::Check).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }

    #[test]
    fn test_add_chain_twice_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chainconf.xml");
        dispatch(&path, Command::Init).unwrap();

        dispatch(&path, Command::AddChain(add_chain_args("cleanup", &["a"]))).unwrap();
        dispatch(&path, Command::AddChain(add_chain_args("cleanup", &["b"]))).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("<chain ").count(), 1);
    }

    #[test]
    fn test_chain_from_args_with_writer_path() {
        let mut args = add_chain_args("c", &["a", " ", "b"]);
        args.writer_path = Some("out".to_string());
        let chain = chain_from_args(args);

        assert_eq!(chain.writer_config.path.as_deref(), Some("out"));
        let types: Vec<&str> = chain
            .walker_config
            .transformations
            .iter()
            .map(|t| t.type_name.as_str())
            .collect();
        assert_eq!(types, vec!["a", "b"]);
    }

    #[test]
    fn test_render_configuration_formats() {
        let mut configuration = Configuration::default();
        configuration.modules.push("core".to_string());

        let yaml = render_configuration(&configuration, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("- core"));

        let json = render_configuration(&configuration, OutputFormat::Json).unwrap();
        assert!(json.contains("\"modules\""));
        assert!(json.ends_with('\n'));
    }
}
