//! CLI Argument Parsing
//!
//! Every flag can also be set from the environment, using the variables
//! Drone exports for plugin settings (`PLUGIN_<SETTING>`). List settings
//! arrive comma-separated.
//!
//! Flags with a built-in default are still `Option`s here so that a value
//! from the config file is only overridden by an explicit flag.

use std::path::PathBuf;

use clap::builder::{FalseyValueParser, NonEmptyStringValueParser};
use clap::{ArgAction, Parser};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Victor - continuous deployment for Pulumi, with the state on a webserver
#[derive(Parser, Debug)]
#[command(name = "victor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Info-level logs and Pulumi progress output
    #[arg(
        long,
        env = "PLUGIN_VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,

    /// URL of the stack state file on the webserver (GET/PUT)
    #[arg(long, env = "PLUGIN_STATEFILE")]
    pub statefile: Option<String>,

    /// Basic-auth username for the webserver
    #[arg(long, env = "PLUGIN_USERNAME")]
    pub username: Option<String>,

    /// Basic-auth password for the webserver
    #[arg(long, env = "PLUGIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Passphrase of the stack secrets (also read from PLUGIN_PASSPHRASE)
    #[arg(long, env = "PULUMI_CONFIG_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    /// Directory of the Pulumi program [default: .]
    #[arg(long, env = "PLUGIN_CONTEXT")]
    pub context: Option<PathBuf>,

    /// Server to download resource plugins from
    #[arg(long, env = "PLUGIN_SERVER")]
    pub server: Option<String>,

    /// Resource plugin to install, as "<name> <version>"
    #[arg(long = "resources", env = "PLUGIN_RESOURCES", value_delimiter = ',')]
    pub resources: Vec<String>,

    /// Stack configuration entry, as "<key> <value>"
    #[arg(long = "configuration", env = "PLUGIN_CONFIGURATION", value_delimiter = ',')]
    pub configuration: Vec<String>,

    /// Where to write the stack outputs as JSON ("-" for stdout)
    #[arg(long, env = "PLUGIN_OUTPUTS", value_parser = NonEmptyStringValueParser::new())]
    pub outputs: Option<String>,

    /// Stack name [default: victor]
    #[arg(long, env = "PLUGIN_STACK")]
    pub stack: Option<String>,

    /// TOML file with default settings
    #[arg(long, env = "PLUGIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, env = "PLUGIN_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Pulumi binary to run [default: pulumi]
    #[arg(long, env = "PLUGIN_PULUMI_BIN")]
    pub pulumi_bin: Option<PathBuf>,
}
