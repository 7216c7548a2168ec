//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CallRecord - phone call state tracking and call recording
#[derive(Parser, Debug)]
#[command(name = "call-record")]
#[command(version)]
#[command(about = "Track phone call state and record calls")]
#[command(long_about = None)]
pub struct Cli {
    /// Preferences file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH", env = "CALL_RECORD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read call notifications and record calls
    Watch {
        /// Read notifications from a file instead of stdin
        #[arg(short = 'i', long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Track calls without capturing audio
        #[arg(long)]
        dry_run: bool,
    },
    /// Manage preferences
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Enable saving recordings
    Enable,
    /// Disable saving recordings
    Disable,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create preferences file with defaults
    Init,
    /// Set a preference value
    Set {
        /// Preference key
        key: String,
        /// Preference value
        value: String,
    },
    /// Get a preference value
    Get {
        /// Preference key
        key: String,
    },
    /// List all preference values
    List,
    /// Show preferences file path
    Path,
}

/// Valid preference keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "save_file",
    "file_name",
    "dir_name",
    "dir_path",
    "show_seed",
    "show_phone_number",
    "audio_source",
    "audio_encoder",
    "output_format",
];

/// Check if a preference key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_watch_defaults() {
        let cli = Cli::parse_from(["call-record", "watch"]);
        assert!(!cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Watch {
                input: None,
                dry_run: false
            }
        ));
    }

    #[test]
    fn cli_parses_watch_options() {
        let cli = Cli::parse_from(["call-record", "watch", "--dry-run", "-i", "calls.txt", "-v"]);
        assert!(cli.verbose);
        if let Commands::Watch { input, dry_run } = cli.command {
            assert_eq!(input, Some(PathBuf::from("calls.txt")));
            assert!(dry_run);
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn cli_parses_global_config() {
        let cli = Cli::parse_from(["call-record", "enable", "--config", "/tmp/p.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/p.toml")));
        assert!(matches!(cli.command, Commands::Enable));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["call-record", "config", "set", "file_name", "Call"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "file_name");
            assert_eq!(value, "Call");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn cli_requires_command() {
        assert!(Cli::try_parse_from(["call-record"]).is_err());
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("save_file"));
        assert!(is_valid_config_key("output_format"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
