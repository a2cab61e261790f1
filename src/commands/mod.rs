mod classify;
mod config;
mod create;
mod desk;
mod ls;
mod stats;
mod status;

pub use classify::cmd_classify;
pub use config::{cmd_config_path, cmd_config_set, cmd_config_show};
pub use create::{CreateOptions, cmd_create};
pub use desk::cmd_desk;
pub use ls::cmd_ls;
pub use stats::cmd_stats;
pub use status::cmd_status;

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::types::{Ticket, TicketPriority, TicketStatus};
use crate::utils::{format_timestamp, truncate_with_ellipsis};

/// Width of the title column in `ls` output
const TITLE_WIDTH: usize = 60;

/// Output of a one-shot command: JSON for scripts, text for people
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output_json: bool) -> Result<()> {
        match (output_json, self.text) {
            (false, Some(text)) => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Status badge colored like the dashboard
pub fn colored_status(status: TicketStatus) -> String {
    let badge = format!("[{}]", status.as_str());
    match status {
        TicketStatus::Open => badge.yellow().to_string(),
        TicketStatus::InProgress => badge.cyan().to_string(),
        TicketStatus::Resolved => badge.green().to_string(),
        TicketStatus::Closed => badge.dimmed().to_string(),
    }
}

pub fn colored_priority(priority: TicketPriority) -> String {
    let label = priority.as_str();
    match priority {
        TicketPriority::Critical => label.red().bold().to_string(),
        TicketPriority::High => label.yellow().to_string(),
        TicketPriority::Medium => label.to_string(),
        TicketPriority::Low => label.dimmed().to_string(),
    }
}

/// Format a ticket for single-line display:
/// `12       [open] high technical  Printer on fire  (Jan 5, 2024, 03:04 PM)`
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let id = format!("{:8}", ticket.id.as_str());
    format!(
        "{} {} {} {} {} {}",
        id.cyan(),
        colored_status(ticket.status),
        colored_priority(ticket.priority),
        ticket.category.as_str().magenta(),
        truncate_with_ellipsis(&ticket.title, TITLE_WIDTH),
        format!("({})", format_timestamp(&ticket.created_at)).dimmed(),
    )
}

/// Multi-line detail view used after create and status changes
pub fn format_ticket_detail(ticket: &Ticket) -> String {
    format!(
        "{} {}\n  {}  {}  {}\n  {}\n  {}",
        format!("#{}", ticket.id).cyan().bold(),
        ticket.title.bold(),
        colored_status(ticket.status),
        colored_priority(ticket.priority),
        ticket.category.as_str().magenta(),
        ticket.description,
        format_timestamp(&ticket.created_at).dimmed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TicketCategory, TicketId};

    fn ticket() -> Ticket {
        Ticket {
            id: TicketId::new("7"),
            title: "VPN drops every hour".to_string(),
            description: "Since Monday".to_string(),
            category: TicketCategory::Technical,
            priority: TicketPriority::High,
            status: TicketStatus::InProgress,
            created_at: "not a timestamp".to_string(),
        }
    }

    #[test]
    fn test_format_ticket_line_contains_fields() {
        let line = format_ticket_line(&ticket());
        assert!(line.contains("7       "));
        assert!(line.contains("[in_progress]"));
        assert!(line.contains("VPN drops every hour"));
        assert!(line.contains("(not a timestamp)"));
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let mut long = ticket();
        long.title = "x".repeat(100);
        let line = format_ticket_line(&long);
        assert!(!line.contains(&"x".repeat(TITLE_WIDTH + 1)));
    }
}
