//! # paramsearch-cli
//!
//! Command-line front end for translating query parameters into search
//! request bodies.
//!
//! # Commands
//!
//! - `translate`: parameters from `--param name=value` and `--query` to JSON
//! - `fields`: list the fields a schema file declares
//! - `config path|show|get|init`: inspect or create the config file

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command, ConfigAction, TranslateArgs};
pub use commands::run;
pub use config::CliConfig;
pub use error::{Error, Result};
