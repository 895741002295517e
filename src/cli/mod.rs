//! Command-line interface definitions.
//!
//! Defines the CLI structure for metaforge using `clap`. Subcommands cover
//! one-shot provisioning, ledgered migrations, catalog status, diagnostic
//! checks, and configuration management.

pub mod check;
pub mod config;
pub mod migrate;
pub mod output;
pub mod paths;
pub mod provision;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MongoDB schema provisioning for the trading platform.
#[derive(Parser, Debug)]
#[command(name = "metaforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create all collections, validators, and indexes (one-shot)
    Provision(ConfigPathArg),

    /// Apply pending migrations recorded in the ledger
    Migrate(ConfigPathArg),

    /// Show catalog and migration status for the target database
    Status(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `metaforge check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
    /// Test connectivity to the MongoDB deployment
    Connection(ConfigPathArg),
}

/// Subcommands for `metaforge config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied
    Show(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_command_factory_builds() {
        // Verifies that the CLI definition is valid
        let _ = Cli::command();
    }

    #[test]
    fn test_cli_has_version() {
        let cmd = Cli::command();
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn test_cli_name() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "metaforge");
    }

    #[test]
    fn test_parse_provision_default_config() {
        let cli = Cli::try_parse_from(["metaforge", "provision"]).unwrap();
        if let Commands::Provision(args) = cli.command {
            assert_eq!(args.config, paths::default_config());
        } else {
            panic!("Expected Provision command");
        }
    }

    #[test]
    fn test_parse_provision_custom_config() {
        let cli =
            Cli::try_parse_from(["metaforge", "provision", "--config", "/tmp/meta.toml"]).unwrap();
        if let Commands::Provision(args) = cli.command {
            assert_eq!(args.config, PathBuf::from("/tmp/meta.toml"));
        } else {
            panic!("Expected Provision command");
        }
    }

    #[test]
    fn test_parse_provision_short_config_flag() {
        let cli = Cli::try_parse_from(["metaforge", "provision", "-c", "meta.toml"]).unwrap();
        if let Commands::Provision(args) = cli.command {
            assert_eq!(args.config, PathBuf::from("meta.toml"));
        } else {
            panic!("Expected Provision command");
        }
    }

    #[test]
    fn test_parse_migrate() {
        let cli = Cli::try_parse_from(["metaforge", "migrate"]).unwrap();
        assert!(matches!(cli.command, Commands::Migrate(_)));
    }

    #[test]
    fn test_parse_status() {
        let cli = Cli::try_parse_from(["metaforge", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_parse_check_config() {
        let cli = Cli::try_parse_from(["metaforge", "check", "config"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check(CheckCommand::Config(_))
        ));
    }

    #[test]
    fn test_parse_check_connection() {
        let cli = Cli::try_parse_from(["metaforge", "check", "connection"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check(CheckCommand::Connection(_))
        ));
    }

    #[test]
    fn test_parse_check_requires_subcommand() {
        let result = Cli::try_parse_from(["metaforge", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_init_defaults() {
        let cli = Cli::try_parse_from(["metaforge", "config", "init"]).unwrap();
        if let Commands::Config(ConfigCommand::Init(args)) = cli.command {
            assert_eq!(args.path, paths::default_config());
            assert!(!args.force);
        } else {
            panic!("Expected Config Init command");
        }
    }

    #[test]
    fn test_parse_config_init_with_path_and_force() {
        let cli =
            Cli::try_parse_from(["metaforge", "config", "init", "/tmp/meta.toml", "--force"])
                .unwrap();
        if let Commands::Config(ConfigCommand::Init(args)) = cli.command {
            assert_eq!(args.path, PathBuf::from("/tmp/meta.toml"));
            assert!(args.force);
        } else {
            panic!("Expected Config Init command");
        }
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["metaforge", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommand::Show(_))
        ));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        let result = Cli::try_parse_from(["metaforge", "deploy"]);
        assert!(result.is_err());
    }
}
