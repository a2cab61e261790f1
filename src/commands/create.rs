use serde_json::json;

use super::{CommandOutput, format_ticket_detail};
use crate::api::{FieldError, FieldErrors, TicketApi};
use crate::error::{HelpdeskError, Result};
use crate::types::{NewTicket, TITLE_MAX_CHARS, TicketCategory, TicketPriority};

/// Options for creating a new ticket
pub struct CreateOptions {
    pub title: String,
    pub description: String,
    pub category: Option<TicketCategory>,
    pub priority: Option<TicketPriority>,
    /// Fill unset category/priority from the classifier
    pub classify: bool,
    pub output_json: bool,
}

impl CreateOptions {
    /// Reject empty or oversized fields before anything is sent
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError {
                field: "title".to_string(),
                messages: vec!["This field is required.".to_string()],
            });
        } else if self.title.chars().count() > TITLE_MAX_CHARS {
            errors.push(FieldError {
                field: "title".to_string(),
                messages: vec![format!(
                    "Ensure this field has no more than {TITLE_MAX_CHARS} characters."
                )],
            });
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError {
                field: "description".to_string(),
                messages: vec!["This field is required.".to_string()],
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(HelpdeskError::Validation(FieldErrors(errors)))
        }
    }
}

/// Create a ticket, optionally letting the classifier pick category and priority
pub async fn cmd_create<A: TicketApi>(api: &A, options: CreateOptions) -> Result<()> {
    options.validate()?;

    let mut category = options.category;
    let mut priority = options.priority;
    let mut classified = false;

    if options.classify && (category.is_none() || priority.is_none()) {
        match api.classify(&options.description).await {
            Ok(suggestion) => {
                classified = true;
                category = category.or(suggestion.category());
                priority = priority.or(suggestion.priority());
            }
            // Creation goes ahead with defaults
            Err(err) => tracing::debug!(error = %err, "classification failed"),
        }
    }

    let draft = NewTicket {
        title: options.title,
        description: options.description,
        category: category.unwrap_or_default(),
        priority: priority.unwrap_or_default(),
    };
    let ticket = api.create_ticket(&draft).await?;
    tracing::debug!(id = %ticket.id, "ticket created");

    CommandOutput::new(json!({
        "id": ticket.id,
        "action": "created",
        "classified": classified,
        "ticket": ticket,
    }))
    .with_text(format!(
        "Created ticket #{}\n{}",
        ticket.id,
        format_ticket_detail(&ticket)
    ))
    .print(options.output_json)
}
