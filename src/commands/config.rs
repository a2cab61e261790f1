//! Configuration commands.
//!
//! - `config show`: Display the effective configuration
//! - `config path`: Print the config file location
//! - `config set`: Validate and store one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::Result;

/// Show the effective configuration, including the resolved service origin
pub fn cmd_config_show(config: &Config, output_json: bool) -> Result<()> {
    let path = Config::config_path()?;
    let api_url = config.api_url();
    let log_file = config
        .log_file
        .as_ref()
        .map(|p| p.display().to_string());

    let json_output = json!({
        "api_url": api_url,
        "request_timeout": config.request_timeout,
        "classify_debounce_ms": config.classify_debounce_ms,
        "search_debounce_ms": config.search_debounce_ms,
        "log_file": log_file,
        "config_file": path.display().to_string(),
    });

    let mut text = format!("{}\n\n", "Configuration:".cyan().bold());
    text.push_str(&format!("{}: {}\n", "api_url".cyan(), api_url));
    text.push_str(&format!(
        "{}: {}s\n",
        "request_timeout".cyan(),
        config.request_timeout
    ));
    text.push_str(&format!(
        "{}: {}ms\n",
        "classify_debounce_ms".cyan(),
        config.classify_debounce_ms
    ));
    text.push_str(&format!(
        "{}: {}ms\n",
        "search_debounce_ms".cyan(),
        config.search_debounce_ms
    ));
    text.push_str(&format!(
        "{}: {}\n",
        "log_file".cyan(),
        log_file.as_deref().unwrap_or("(none)")
    ));
    text.push_str(&format!("\n{} {}", "Config file:".dimmed(), path.display()));

    CommandOutput::new(json_output)
        .with_text(text)
        .print(output_json)
}

/// Print where the config file lives
pub fn cmd_config_path(output_json: bool) -> Result<()> {
    let path = Config::config_path()?;
    CommandOutput::new(json!({ "config_file": path.display().to_string() }))
        .with_text(path.display().to_string())
        .print(output_json)
}

/// Set a configuration value and save the file
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    tracing::debug!(key, "config updated");

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": value,
    }))
    .with_text(format!("Set {} = {}", key.cyan(), value))
    .print(output_json)
}
