//! Filtered ticket list.
//!
//! Category, priority and status filters apply immediately. Search text is
//! typed into a local buffer and copied into the filters only after it has
//! been still for the search debounce window.

use std::time::{Duration, Instant};

use crate::api::TicketQuery;
use crate::error::Result;
use crate::types::{Ticket, TicketCategory, TicketId, TicketPriority, TicketStatus};
use crate::utils::pluralize_tickets;

use super::card::CardState;
use super::debounce::Debouncer;
use super::model::Effect;
use super::sequence::{RequestSequence, RequestToken};

pub const LOAD_FAILED: &str = "Failed to load tickets. Please try again.";

/// A change to one of the select filters. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterUpdate {
    Category(Option<TicketCategory>),
    Priority(Option<TicketPriority>),
    Status(Option<TicketStatus>),
}

/// Why the list has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The service has no tickets at all
    NoTickets,
    /// Tickets may exist, but none match the active filters
    NoMatches,
}

impl EmptyReason {
    pub fn message(self) -> &'static str {
        match self {
            EmptyReason::NoTickets => "No tickets found. Create your first ticket above!",
            EmptyReason::NoMatches => "No tickets found. Try adjusting your filters.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TicketList {
    filters: TicketQuery,
    search_input: String,
    search: Debouncer<String>,
    requests: RequestSequence,
    cards: Vec<CardState>,
    error: Option<String>,
}

impl TicketList {
    pub fn new(search_debounce: Duration) -> Self {
        Self {
            filters: TicketQuery::new(),
            search_input: String::new(),
            search: Debouncer::new(search_debounce),
            requests: RequestSequence::new(),
            cards: Vec::new(),
            error: None,
        }
    }

    pub fn filters(&self) -> &TicketQuery {
        &self.filters
    }

    /// Search text as typed, possibly not yet applied
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn card(&self, id: &TicketId) -> Option<&CardState> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.requests.in_flight()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_unconstrained()
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if self.is_loading() || !self.cards.is_empty() {
            return None;
        }
        Some(if self.has_active_filters() {
            EmptyReason::NoMatches
        } else {
            EmptyReason::NoTickets
        })
    }

    /// "3 tickets"; hidden while a fetch is running
    pub fn count_label(&self) -> Option<String> {
        if self.is_loading() {
            None
        } else {
            Some(pluralize_tickets(self.cards.len()))
        }
    }

    /// Issue a fetch with the current filters
    pub fn fetch(&mut self) -> Effect {
        self.error = None;
        let token = self.requests.issue();
        tracing::debug!(token = token.value(), query = ?self.filters, "fetching tickets");
        Effect::FetchTickets {
            token,
            query: self.filters.clone(),
        }
    }

    pub fn set_filter(&mut self, update: FilterUpdate) -> Effect {
        match update {
            FilterUpdate::Category(category) => self.filters.category = category,
            FilterUpdate::Priority(priority) => self.filters.priority = priority,
            FilterUpdate::Status(status) => self.filters.status = status,
        }
        self.fetch()
    }

    pub fn set_search_input(&mut self, text: String, now: Instant) {
        self.search_input = text.clone();
        self.search.push(text, now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Apply settled search text. Text equal to the active search is not refetched.
    pub fn poll_search(&mut self, now: Instant) -> Option<Effect> {
        let text = self.search.poll(now)?;
        let search = Some(text).filter(|t| !t.is_empty());
        if search == self.filters.search {
            return None;
        }
        self.filters.search = search;
        Some(self.fetch())
    }

    /// Reset every filter, including typed search text, with one refetch
    pub fn clear_filters(&mut self) -> Effect {
        self.filters = TicketQuery::new();
        self.search_input.clear();
        self.search.cancel();
        self.fetch()
    }

    /// A card reported a change; refetch unconditionally
    pub fn on_update(&mut self) -> Effect {
        self.fetch()
    }

    pub fn apply_fetched(&mut self, token: RequestToken, result: Result<Vec<Ticket>>) {
        if !self.requests.finish(token) {
            tracing::debug!(token = token.value(), "discarding stale ticket list");
            return;
        }

        match result {
            Ok(tickets) => {
                let mut previous = std::mem::take(&mut self.cards);
                self.cards = tickets
                    .into_iter()
                    .map(|ticket| match previous.iter().position(|c| *c.id() == ticket.id) {
                        Some(index) => {
                            let mut card = previous.swap_remove(index);
                            card.refresh(ticket);
                            card
                        }
                        None => CardState::new(ticket),
                    })
                    .collect();
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load tickets");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    /// Optimistically change a card's status, yielding the request to send
    pub fn begin_status_change(&mut self, id: &TicketId, status: TicketStatus) -> Option<Effect> {
        let card = self.cards.iter_mut().find(|c| c.id() == id)?;
        if !card.begin_status_change(status) {
            return None;
        }
        Some(Effect::UpdateStatus {
            id: id.clone(),
            status,
        })
    }

    /// Settle a status change; an accepted change triggers a refetch
    pub fn apply_status_updated(&mut self, id: &TicketId, result: Result<Ticket>) -> Option<Effect> {
        let accepted = match self.cards.iter_mut().find(|c| c.id() == id) {
            Some(card) => card.finish_status_change(&result),
            None => result.is_ok(),
        };
        accepted.then(|| self.on_update())
    }
}
