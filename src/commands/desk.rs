//! Dashboard command (`helpdesk desk`)
//!
//! Launches the interactive ticket dashboard against the configured service.

use iocraft::prelude::*;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{HelpdeskError, Result};
use crate::logging;
use crate::tui::DeskApp;

/// Launch the dashboard TUI
pub async fn cmd_desk(config: &Config) -> Result<()> {
    logging::init_file(config.log_file.as_deref())?;

    let api = ApiClient::from_config(config)?;
    let origin = api.base_url().as_str().trim_end_matches('/').to_string();
    let timing = config.timing();
    tracing::info!(%origin, "starting dashboard");

    element!(DeskApp(api: Some(api), timing, origin: Some(origin)))
        .fullscreen()
        .await
        .map_err(|e| HelpdeskError::Other(format!("TUI error: {e}")))
}
