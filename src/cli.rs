use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::str::FromStr;

use crate::api::TicketQuery;
use crate::types::{
    TicketCategory, TicketPriority, TicketStatus, VALID_CATEGORIES, VALID_PRIORITIES,
    VALID_STATUSES,
};

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(about = "Support-ticket client with an interactive dashboard")]
#[command(version)]
pub struct Cli {
    /// Ticket service origin (overrides HELPDESK_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// With no subcommand the dashboard is launched
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive dashboard
    #[command(visible_alias = "d")]
    Desk,

    /// List tickets, newest first
    Ls {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new ticket
    #[command(visible_alias = "c")]
    Create {
        /// Ticket title (at most 200 characters)
        title: String,

        /// Description text
        #[arg(short, long)]
        description: String,

        /// Category: billing, technical, account, general (default: general)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<TicketCategory>,

        /// Priority: low, medium, high, critical (default: medium)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<TicketPriority>,

        /// Let the classifier fill in category and priority when not given
        #[arg(long)]
        classify: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a ticket's status
    #[command(visible_alias = "s")]
    Status {
        /// Ticket ID
        #[arg(value_parser = parse_ticket_id)]
        id: String,

        /// New status: open, in_progress, resolved, closed
        #[arg(value_parser = parse_status)]
        status: TicketStatus,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the classifier for a category and priority
    Classify {
        /// Description text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show aggregate ticket statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Filters shared by `ls`
#[derive(clap::Args, Default)]
pub struct FilterArgs {
    /// Only tickets in this category
    #[arg(long, value_parser = parse_category)]
    pub category: Option<TicketCategory>,

    /// Only tickets with this priority
    #[arg(long, value_parser = parse_priority)]
    pub priority: Option<TicketPriority>,

    /// Only tickets with this status
    #[arg(long, value_parser = parse_status)]
    pub status: Option<TicketStatus>,

    /// Free-text search over title and description
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn into_query(self) -> TicketQuery {
        TicketQuery {
            category: self.category,
            priority: self.priority,
            status: self.status,
            search: self.search.filter(|s| !s.trim().is_empty()),
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location
    Path {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// One of: api_url, request_timeout, classify_debounce_ms, search_debounce_ms, log_file
        key: String,
        /// New value (an empty log_file clears it)
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_category(s: &str) -> Result<TicketCategory, String> {
    parse_with_validation(
        s,
        |v| TicketCategory::from_str(v).map_err(|_| String::new()),
        "category",
        VALID_CATEGORIES,
    )
}

fn parse_priority(s: &str) -> Result<TicketPriority, String> {
    parse_with_validation(
        s,
        |v| TicketPriority::from_str(v).map_err(|_| String::new()),
        "priority",
        VALID_PRIORITIES,
    )
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    parse_with_validation(
        s,
        |v| TicketStatus::from_str(v).map_err(|_| String::new()),
        "status",
        VALID_STATUSES,
    )
}

fn parse_ticket_id(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Ticket ID cannot be empty".to_string());
    }
    if trimmed.contains('/') {
        return Err(format!("Invalid ticket ID '{s}'"));
    }
    Ok(trimmed.to_string())
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "helpdesk", &mut io::stdout());
}
