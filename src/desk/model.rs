//! Dashboard state for testable state management
//!
//! `DeskModel` composes the form, list and stats panes and owns the refresh
//! counter that ties them together. It never performs I/O: every transition
//! returns the requests to send as `Effect`s, and each response comes back as
//! an `Outcome`.

use std::time::Instant;

use crate::api::TicketQuery;
use crate::config::Timing;
use crate::error::Result;
use crate::types::{
    Classification, NewTicket, Ticket, TicketId, TicketStats, TicketStatus,
};

use super::form::{FieldUpdate, TicketForm};
use super::list::{FilterUpdate, TicketList};
use super::refresh::{RefreshCounter, RefreshWatcher};
use super::sequence::RequestToken;
use super::stats::StatsPanel;

// ============================================================================
// Effects and outcomes
// ============================================================================

/// A request the model wants sent
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Classify {
        token: RequestToken,
        description: String,
    },
    CreateTicket {
        ticket: NewTicket,
    },
    FetchTickets {
        token: RequestToken,
        query: TicketQuery,
    },
    UpdateStatus {
        id: TicketId,
        status: TicketStatus,
    },
    FetchStats {
        token: RequestToken,
    },
}

/// The response to an `Effect`
#[derive(Debug)]
pub enum Outcome {
    Classified {
        token: RequestToken,
        result: Result<Classification>,
    },
    Created {
        result: Result<Ticket>,
    },
    TicketsFetched {
        token: RequestToken,
        result: Result<Vec<Ticket>>,
    },
    StatusUpdated {
        id: TicketId,
        result: Result<Ticket>,
    },
    StatsFetched {
        token: RequestToken,
        result: Result<TicketStats>,
    },
}

/// User intents the model understands
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    EditField(FieldUpdate),
    SubmitForm,
    ResetForm,
    SetFilter(FilterUpdate),
    SearchInput(String),
    ClearFilters,
    ChangeStatus { id: TicketId, status: TicketStatus },
    /// Refetch list and stats without touching the refresh counter
    Refresh,
}

// ============================================================================
// Model
// ============================================================================

#[derive(Debug, Clone)]
pub struct DeskModel {
    pub form: TicketForm,
    pub list: TicketList,
    pub stats: StatsPanel,
    refresh: RefreshCounter,
    list_refresh: RefreshWatcher,
    stats_refresh: RefreshWatcher,
    last_created: Option<Ticket>,
}

impl Default for DeskModel {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

impl DeskModel {
    pub fn new(timing: Timing) -> Self {
        let refresh = RefreshCounter::new();
        Self {
            form: TicketForm::new(timing.classify_debounce),
            list: TicketList::new(timing.search_debounce),
            stats: StatsPanel::new(),
            list_refresh: RefreshWatcher::new(&refresh),
            stats_refresh: RefreshWatcher::new(&refresh),
            refresh,
            last_created: None,
        }
    }

    /// Initial fetches for the list and stats panes
    pub fn mount(&mut self) -> Vec<Effect> {
        vec![self.list.fetch(), self.stats.fetch()]
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh.value()
    }

    /// The most recently created ticket, cleared once taken
    pub fn take_created(&mut self) -> Option<Ticket> {
        self.last_created.take()
    }

    pub fn handle(&mut self, action: Action, now: Instant) -> Vec<Effect> {
        match action {
            Action::EditField(update) => {
                self.form.update_field(update, now);
                Vec::new()
            }
            Action::SubmitForm => self.form.submit().into_iter().collect(),
            Action::ResetForm => {
                self.form.reset();
                Vec::new()
            }
            Action::SetFilter(update) => vec![self.list.set_filter(update)],
            Action::SearchInput(text) => {
                self.list.set_search_input(text, now);
                Vec::new()
            }
            Action::ClearFilters => vec![self.list.clear_filters()],
            Action::ChangeStatus { id, status } => {
                self.list.begin_status_change(&id, status).into_iter().collect()
            }
            Action::Refresh => self.mount(),
        }
    }

    /// Fire any debounce timers that have expired by `now`
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        self.form
            .poll_classify(now)
            .into_iter()
            .chain(self.list.poll_search(now))
            .collect()
    }

    /// Earliest instant at which `tick` could produce something
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.form.next_deadline(), self.list.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn apply(&mut self, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Classified { token, result } => {
                self.form.apply_classification(token, result);
                Vec::new()
            }
            Outcome::Created { result } => match self.form.apply_created(result) {
                Some(ticket) => {
                    tracing::debug!(id = %ticket.id, "ticket created");
                    self.last_created = Some(ticket);
                    self.refresh.bump();
                    self.observe_refresh()
                }
                None => Vec::new(),
            },
            Outcome::TicketsFetched { token, result } => {
                self.list.apply_fetched(token, result);
                Vec::new()
            }
            Outcome::StatusUpdated { id, result } => {
                self.list.apply_status_updated(&id, result).into_iter().collect()
            }
            Outcome::StatsFetched { token, result } => {
                self.stats.apply_fetched(token, result);
                Vec::new()
            }
        }
    }

    /// Let the list and stats panes react to a changed refresh counter
    fn observe_refresh(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.list_refresh.observe(&self.refresh) {
            effects.push(self.list.fetch());
        }
        if self.stats_refresh.observe(&self.refresh) {
            effects.push(self.stats.fetch());
        }
        effects
    }
}
