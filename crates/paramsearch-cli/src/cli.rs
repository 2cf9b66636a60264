//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

/// Translate HTTP query parameters into search queries.
#[derive(Parser, Debug)]
#[command(name = "paramsearch", version, about)]
pub struct Cli {
    /// Path to a configuration file
    #[arg(short, long, global = true, env = "PARAMSEARCH_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate parameters into a search query and print it as JSON
    Translate(TranslateArgs),

    /// List the fields a schema file declares
    Fields {
        /// Schema file (TOML, or JSON by extension)
        #[arg(short, long)]
        schema: Option<String>,
    },

    /// Inspect or create the configuration file
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `translate`.
#[derive(Args, Debug, Default)]
pub struct TranslateArgs {
    /// Schema file (TOML, or JSON by extension)
    #[arg(short, long)]
    pub schema: Option<String>,

    /// A `name=value` parameter; repeat for several values
    #[arg(short, long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// A URL-encoded query string such as `age=12&nameMatch=John`
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Print the bool query without the `{"query": ...}` envelope
    #[arg(long)]
    pub bare: bool,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Get a configuration value by dotted key
    Get {
        /// Dotted key such as `mapper.keyword_subfield`
        key: String,
    },

    /// Write a default configuration file
    Init {
        /// Where to write it (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Splits `name=value` on the first `=`.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing parameter name in '{raw}'")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected name=value, got '{raw}'")),
    }
}
