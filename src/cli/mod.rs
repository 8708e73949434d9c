//! CLI argument parsing for chainconf.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! command implementations live in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// chainconf: inspect and update transformation-chain configuration files.
#[derive(Parser, Debug)]
#[command(name = "chainconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file to operate on.
    #[arg(short, long, global = true, default_value = chainconf::provider::DEFAULT_FILE_NAME)]
    pub config: PathBuf,

    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for chainconf.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty configuration file if none exists.
    Init,

    /// Load the configuration and print it.
    Show(ShowArgs),

    /// Load the configuration and report whether it is valid.
    Check,

    /// Append a transformation chain to the configuration file.
    AddChain(AddChainArgs),

    /// Register a plugin in the configuration file.
    AddPlugin(AddPluginArgs),
}

/// Output format for the `show` command.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Arguments for the `add-chain` command.
#[derive(Parser, Debug)]
pub struct AddChainArgs {
    /// Chain name (generated from its position when omitted).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Path the chain reads from.
    #[arg(long)]
    pub reader_path: Option<String>,

    /// Path the chain writes to (defaults to the reader path).
    #[arg(long)]
    pub writer_path: Option<String>,

    /// Transformation types, in execution order.
    #[arg(short, long = "transformation", required = true, value_delimiter = ',')]
    pub transformations: Vec<String>,
}

/// Arguments for the `add-plugin` command.
#[derive(Parser, Debug)]
pub struct AddPluginArgs {
    #[arg(long)]
    pub group_id: String,

    #[arg(long)]
    pub artifact_id: String,

    /// Plugin version (`--version` is taken by the CLI itself).
    #[arg(long = "plugin-version")]
    pub plugin_version: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_show_defaults() {
        let cli = Cli::try_parse_from(["chainconf", "show"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("chainconf.xml"));
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Command::Show(args) => assert_eq!(args.format, OutputFormat::Yaml),
            other => panic!("Expected Show command, got {:?}", other),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["chainconf", "check", "--config", "conf/pipeline.xml", "-vv"])
            .unwrap();
        assert_eq!(cli.config, PathBuf::from("conf/pipeline.xml"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn parse_add_chain() {
        let cli = Cli::try_parse_from([
            "chainconf",
            "add-chain",
            "--name",
            "cleanup",
            "--reader-path",
            "src",
            "-t",
            "imports-cleaner,formatter",
        ])
        .unwrap();
        if let Command::AddChain(args) = cli.command {
            assert_eq!(args.name.as_deref(), Some("cleanup"));
            assert_eq!(args.reader_path.as_deref(), Some("src"));
            assert_eq!(args.writer_path, None);
            assert_eq!(args.transformations, vec!["imports-cleaner", "formatter"]);
        } else {
            panic!("Expected AddChain command");
        }
    }

    #[test]
    fn parse_add_chain_requires_transformation() {
        assert!(Cli::try_parse_from(["chainconf", "add-chain", "--name", "x"]).is_err());
    }

    #[test]
    fn parse_add_plugin() {
        let cli = Cli::try_parse_from([
            "chainconf",
            "add-plugin",
            "--group-id",
            "org.example",
            "--artifact-id",
            "formatter",
            "--plugin-version",
            "1.0",
        ])
        .unwrap();
        if let Command::AddPlugin(args) = cli.command {
            assert_eq!(args.group_id, "org.example");
            assert_eq!(args.artifact_id, "formatter");
            assert_eq!(args.plugin_version, "1.0");
        } else {
            panic!("Expected AddPlugin command");
        }
    }
}
