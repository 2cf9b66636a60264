//! Handler functions for CLI commands.
//!
//! Handlers return the text to print so they can be tested without
//! capturing stdout; [`run`] does the printing.

use paramsearch_core::SchemaRegistry;
use paramsearch_query::{ParamMapper, QueryParams, SearchSource};
use serde_json::Value;

use crate::cli::{Cli, Command, ConfigAction, TranslateArgs};
use crate::config::CliConfig;
use crate::error::{Error, Result};

// ============================================================================
// Dispatch
// ============================================================================

/// Runs a parsed command line and prints its output.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    let output = match cli.command {
        Command::Translate(args) => {
            let config = CliConfig::load(config_path)?;
            cmd_translate(&config, &args)?
        }
        Command::Fields { schema } => {
            let config = CliConfig::load(config_path)?;
            cmd_fields(&config, schema.as_deref())?
        }
        Command::Config { action } => handle_config_command(config_path, action)?,
    };
    println!("{output}");
    Ok(())
}

/// Handles a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<String> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => CliConfig::load(config_path)?.to_toml_string(),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
    }
}

// ============================================================================
// Query commands
// ============================================================================

/// Translates the given parameters into a search request body.
pub fn cmd_translate(config: &CliConfig, args: &TranslateArgs) -> Result<String> {
    let registry = load_registry(config, args.schema.as_deref())?;
    let mapper = ParamMapper::new(registry).with_config(config.mapper.clone());

    let mut params = match &args.query {
        Some(query) => QueryParams::from_query_string(query),
        None => QueryParams::new(),
    };
    for (name, value) in &args.params {
        params.append(name.as_str(), value.as_str());
    }
    tracing::debug!(count = params.len(), "Translating parameters");

    let query = mapper.convert(&params)?;
    let json = if args.bare {
        query.to_json()
    } else {
        SearchSource::new(query).to_json()
    };
    render_json(&json, config.pretty && !args.compact)
}

/// Lists the fields of a schema as `name  type  nullable` rows.
pub fn cmd_fields(config: &CliConfig, schema: Option<&str>) -> Result<String> {
    let registry = load_registry(config, schema)?;
    let width = registry.field_names().map(str::len).max().unwrap_or(0);
    let rows: Vec<String> = registry
        .fields()
        .map(|field| {
            let nullable = if field.is_nullable() { "nullable" } else { "" };
            format!(
                "{:width$}  {:8}  {nullable}",
                field.name(),
                field.semantic_type().as_str()
            )
            .trim_end()
            .to_string()
        })
        .collect();
    Ok(rows.join("\n"))
}

fn load_registry(config: &CliConfig, schema: Option<&str>) -> Result<SchemaRegistry> {
    let path = schema
        .or(config.schema_path.as_deref())
        .ok_or_else(|| Error::config("No schema given; pass --schema or set schema_path"))?;
    let registry = SchemaRegistry::load(path)?;
    tracing::debug!(path, fields = registry.len(), "Loaded schema");
    Ok(registry)
}

fn render_json(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

// ============================================================================
// Config commands
// ============================================================================

/// Shows the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<String> {
    let path = CliConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    if !path.exists() {
        eprintln!("(file does not exist; run `paramsearch config init` to create it)");
    }
    Ok(path.display().to_string())
}

/// Gets a configuration value by dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = CliConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Writes a default configuration file to `file`, or to the platform path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<String> {
    let target = CliConfig::resolve_config_path(file)
        .ok_or_else(|| Error::config("No platform config directory; pass --file"))?;
    CliConfig::default().write_to(&target, force)?;
    Ok(format!("Wrote default configuration to {}", target.display()))
}

/// Navigates a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Formats a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
