//! Draft state for the "create ticket" form.
//!
//! Description edits schedule a classification request once typing pauses;
//! the suggestion overwrites category and priority only where the classifier
//! named a known value.

use std::time::{Duration, Instant};

use crate::api::{FieldError, FieldErrors};
use crate::error::Result;
use crate::types::{
    Classification, NewTicket, TITLE_MAX_CHARS, Ticket, TicketCategory, TicketPriority,
};

use super::debounce::Debouncer;
use super::model::Effect;
use super::sequence::{RequestSequence, RequestToken};

pub const CREATE_FAILED: &str = "Failed to create ticket. Please try again.";

const REQUIRED: &str = "This field is required.";

/// Form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Category,
    Priority,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::Category,
        FormField::Priority,
    ];

    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Category,
            FormField::Category => FormField::Priority,
            FormField::Priority => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Priority,
            FormField::Description => FormField::Title,
            FormField::Category => FormField::Description,
            FormField::Priority => FormField::Category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title *",
            FormField::Description => "Description *",
            FormField::Category => "Category",
            FormField::Priority => "Priority",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, FormField::Title | FormField::Description)
    }
}

/// A new value for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Title(String),
    Description(String),
    Category(TicketCategory),
    Priority(TicketPriority),
}

#[derive(Debug, Clone)]
pub struct TicketForm {
    title: String,
    description: String,
    category: TicketCategory,
    priority: TicketPriority,
    classify: Debouncer<String>,
    classify_requests: RequestSequence,
    submitting: bool,
    error: Option<String>,
}

impl TicketForm {
    pub fn new(classify_debounce: Duration) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: TicketCategory::default(),
            priority: TicketPriority::default(),
            classify: Debouncer::new(classify_debounce),
            classify_requests: RequestSequence::new(),
            submitting: false,
            error: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn priority(&self) -> TicketPriority {
        self.priority
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submission is disabled while this is true
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// A classification request is outstanding
    pub fn is_classifying(&self) -> bool {
        self.classify_requests.in_flight()
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.category == TicketCategory::default()
            && self.priority == TicketPriority::default()
    }

    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Category => self.category.label(),
            FormField::Priority => self.priority.label(),
        }
    }

    /// The payload a submit would send
    pub fn draft(&self) -> NewTicket {
        NewTicket {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            priority: self.priority,
        }
    }

    pub fn update_field(&mut self, update: FieldUpdate, now: Instant) {
        match update {
            FieldUpdate::Title(title) => {
                self.title = title.chars().take(TITLE_MAX_CHARS).collect();
            }
            FieldUpdate::Description(description) => {
                if description == self.description {
                    return;
                }
                self.description = description;
                if self.description.trim().is_empty() {
                    self.classify.cancel();
                } else {
                    self.classify.push(self.description.clone(), now);
                }
            }
            FieldUpdate::Category(category) => self.category = category,
            FieldUpdate::Priority(priority) => self.priority = priority,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.classify.deadline()
    }

    /// Fire the classification request once the description has settled
    pub fn poll_classify(&mut self, now: Instant) -> Option<Effect> {
        let description = self.classify.poll(now)?;
        let token = self.classify_requests.issue();
        tracing::debug!(token = token.value(), "classifying description");
        Some(Effect::Classify { token, description })
    }

    pub fn apply_classification(&mut self, token: RequestToken, result: Result<Classification>) {
        if !self.classify_requests.finish(token) {
            tracing::debug!(token = token.value(), "discarding stale classification");
            return;
        }

        match result {
            Ok(suggestion) => {
                if let Some(category) = suggestion.category() {
                    self.category = category;
                }
                if let Some(priority) = suggestion.priority() {
                    self.priority = priority;
                }
            }
            Err(err) => tracing::debug!(error = %err, "classification failed"),
        }
    }

    /// Start submission. Returns `None` when a submit is already running or a
    /// required field is empty.
    pub fn submit(&mut self) -> Option<Effect> {
        if self.submitting {
            return None;
        }

        let missing: Vec<FieldError> = [("title", &self.title), ("description", &self.description)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| FieldError {
                field: field.to_string(),
                messages: vec![REQUIRED.to_string()],
            })
            .collect();
        if !missing.is_empty() {
            self.error = Some(FieldErrors(missing).to_string());
            return None;
        }

        self.error = None;
        self.submitting = true;
        Some(Effect::CreateTicket {
            ticket: self.draft(),
        })
    }

    /// Settle a submission. On success the form is reset and the created
    /// ticket is handed back; on failure the draft is kept.
    pub fn apply_created(&mut self, result: Result<Ticket>) -> Option<Ticket> {
        self.submitting = false;
        match result {
            Ok(ticket) => {
                self.reset();
                Some(ticket)
            }
            Err(err) => {
                tracing::warn!(error = %err, "ticket creation failed");
                self.error = Some(match err.field_errors() {
                    Some(errors) => errors.to_string(),
                    None => CREATE_FAILED.to_string(),
                });
                None
            }
        }
    }

    /// Clear every field back to its default and drop pending classification
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.category = TicketCategory::default();
        self.priority = TicketPriority::default();
        self.classify.cancel();
        self.classify_requests.invalidate();
        self.error = None;
    }
}
