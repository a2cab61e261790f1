//! One ticket in the list, with its status selector.

use crate::error::Result;
use crate::types::{Ticket, TicketId, TicketStatus};
use crate::utils::{format_timestamp, truncate_with_ellipsis};

use super::optimistic::Optimistic;

/// Characters of description shown on a card before truncation
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;

pub const STATUS_UPDATE_FAILED: &str = "Failed to update status";

#[derive(Debug, Clone)]
pub struct CardState {
    ticket: Ticket,
    status: Optimistic<TicketStatus>,
    error: Option<String>,
}

impl CardState {
    pub fn new(ticket: Ticket) -> Self {
        let status = Optimistic::new(ticket.status);
        Self {
            ticket,
            status,
            error: None,
        }
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn id(&self) -> &TicketId {
        &self.ticket.id
    }

    /// Status as displayed, including an unconfirmed change
    pub fn status(&self) -> TicketStatus {
        *self.status.value()
    }

    /// The selector is disabled while this is true
    pub fn is_updating(&self) -> bool {
        self.status.is_pending()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn description_preview(&self) -> String {
        truncate_with_ellipsis(&self.ticket.description, DESCRIPTION_PREVIEW_CHARS)
    }

    pub fn created_label(&self) -> String {
        format_timestamp(&self.ticket.created_at)
    }

    /// Show `status` immediately. Returns false if an update is already in
    /// flight or the status would not change.
    pub fn begin_status_change(&mut self, status: TicketStatus) -> bool {
        if self.is_updating() || status == self.status() {
            return false;
        }
        self.error = None;
        self.status.begin(status)
    }

    /// Settle an in-flight status change. Returns true when the service accepted it.
    pub fn finish_status_change(&mut self, result: &Result<Ticket>) -> bool {
        match result {
            Ok(updated) => {
                self.status.confirm(updated.status);
                self.ticket = updated.clone();
                true
            }
            Err(err) => {
                tracing::warn!(id = %self.ticket.id, error = %err, "status update failed");
                self.status.rollback();
                self.error = Some(STATUS_UPDATE_FAILED.to_string());
                false
            }
        }
    }

    /// Take a freshly fetched copy of the ticket
    pub fn refresh(&mut self, ticket: Ticket) {
        self.status.refresh(ticket.status);
        self.ticket = ticket;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelpdeskError;
    use crate::types::{TicketCategory, TicketPriority};

    fn ticket(status: TicketStatus) -> Ticket {
        Ticket {
            id: TicketId::new("7"),
            title: "Printer on fire".to_string(),
            description: "x".repeat(200),
            category: TicketCategory::Technical,
            priority: TicketPriority::Critical,
            status,
            created_at: "2024-01-05T15:04:05Z".to_string(),
        }
    }

    #[test]
    fn test_description_preview_truncates() {
        let card = CardState::new(ticket(TicketStatus::Open));
        let preview = card.description_preview();
        assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_status_change_is_optimistic() {
        let mut card = CardState::new(ticket(TicketStatus::Open));
        assert!(card.begin_status_change(TicketStatus::Resolved));
        assert_eq!(card.status(), TicketStatus::Resolved);
        assert!(card.is_updating());
        assert!(!card.begin_status_change(TicketStatus::Closed));
    }

    #[test]
    fn test_same_status_is_not_a_change() {
        let mut card = CardState::new(ticket(TicketStatus::Open));
        assert!(!card.begin_status_change(TicketStatus::Open));
        assert!(!card.is_updating());
    }

    #[test]
    fn test_failed_change_reverts_and_reports() {
        let mut card = CardState::new(ticket(TicketStatus::Open));
        card.begin_status_change(TicketStatus::Closed);

        let accepted = card.finish_status_change(&Err(HelpdeskError::Other("boom".into())));
        assert!(!accepted);
        assert_eq!(card.status(), TicketStatus::Open);
        assert_eq!(card.error(), Some(STATUS_UPDATE_FAILED));
        assert!(!card.is_updating());
    }

    #[test]
    fn test_next_change_clears_error() {
        let mut card = CardState::new(ticket(TicketStatus::Open));
        card.begin_status_change(TicketStatus::Closed);
        card.finish_status_change(&Err(HelpdeskError::Other("boom".into())));

        card.begin_status_change(TicketStatus::InProgress);
        assert_eq!(card.error(), None);
    }

    #[test]
    fn test_successful_change_confirms() {
        let mut card = CardState::new(ticket(TicketStatus::Open));
        card.begin_status_change(TicketStatus::InProgress);
        assert!(card.finish_status_change(&Ok(ticket(TicketStatus::InProgress))));
        assert_eq!(card.status(), TicketStatus::InProgress);
        assert_eq!(card.ticket().status, TicketStatus::InProgress);
    }
}
