//! Ticket service API.
//!
//! `TicketApi` is the seam between the dashboard model and the network. The
//! production implementation is [`ApiClient`]; tests drive the model with an
//! in-memory implementation instead.

pub mod client;
pub mod error;

use std::future::Future;

use crate::error::Result;
use crate::types::{
    Classification, NewTicket, Ticket, TicketCategory, TicketId, TicketPriority, TicketStats,
    TicketStatus,
};

pub use client::{ApiClient, DEFAULT_API_URL};
pub use error::{FieldError, FieldErrors, error_from_response};

/// Query for `GET /api/tickets/`. Unset (or blank) fields are left out of the
/// request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketQuery {
    pub category: Option<TicketCategory>,
    pub priority: Option<TicketPriority>,
    pub status: Option<TicketStatus>,
    pub search: Option<String>,
}

impl TicketQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query parameters in a fixed order, omitting unconstrained fields
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(search) = self.search.as_deref()
            && !search.is_empty()
        {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }

    pub fn is_unconstrained(&self) -> bool {
        self.to_pairs().is_empty()
    }
}

/// Operations offered by the ticket service
pub trait TicketApi: Send + Sync {
    /// List tickets matching the query, newest first
    fn list_tickets(
        &self,
        query: &TicketQuery,
    ) -> impl Future<Output = Result<Vec<Ticket>>> + Send;

    /// Create a ticket
    fn create_ticket(&self, ticket: &NewTicket) -> impl Future<Output = Result<Ticket>> + Send;

    /// Change the status of one ticket
    fn update_status(
        &self,
        id: &TicketId,
        status: TicketStatus,
    ) -> impl Future<Output = Result<Ticket>> + Send;

    /// Ask the classifier for a category/priority suggestion
    fn classify(&self, description: &str) -> impl Future<Output = Result<Classification>> + Send;

    /// Fetch the aggregate statistics snapshot
    fn stats(&self) -> impl Future<Output = Result<TicketStats>> + Send;
}
