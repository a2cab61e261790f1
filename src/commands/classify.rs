use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::api::TicketApi;
use crate::error::{HelpdeskError, Result};

/// Ask the classifier what category and priority it would pick for a description
pub async fn cmd_classify<A: TicketApi>(api: &A, description: &str, output_json: bool) -> Result<()> {
    if description.trim().is_empty() {
        return Err(HelpdeskError::Other("description cannot be empty".to_string()));
    }

    let suggestion = api.classify(description).await?;
    let category = suggestion.category();
    let priority = suggestion.priority();

    let describe = |value: Option<&'static str>| match value {
        Some(label) => label.green().to_string(),
        None => "no suggestion".dimmed().to_string(),
    };

    CommandOutput::new(json!({
        "suggested_category": category,
        "suggested_priority": priority,
    }))
    .with_text(format!(
        "Category: {}\nPriority: {}",
        describe(category.map(|c| c.label())),
        describe(priority.map(|p| p.label())),
    ))
    .print(output_json)
}
