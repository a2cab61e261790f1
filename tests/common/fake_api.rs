//! In-memory `TicketApi` that records every call.
//!
//! Each operation answers from a queue of scripted results first, then falls
//! back to a plausible success built from the stored tickets.

use std::collections::VecDeque;

use parking_lot::Mutex;

use helpdesk::api::{TicketApi, TicketQuery};
use helpdesk::error::Result;
use helpdesk::types::{
    Classification, NewTicket, Ticket, TicketId, TicketStats, TicketStatus,
};

/// One request the fake received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(TicketQuery),
    Create(NewTicket),
    UpdateStatus(TicketId, TicketStatus),
    Classify(String),
    Stats,
}

#[derive(Default)]
struct Inner {
    tickets: Vec<Ticket>,
    calls: Vec<Call>,
    next_id: u64,
    list: VecDeque<Result<Vec<Ticket>>>,
    create: VecDeque<Result<Ticket>>,
    update: VecDeque<Result<Ticket>>,
    classify: VecDeque<Result<Classification>>,
    stats: VecDeque<Result<TicketStats>>,
}

#[derive(Default)]
pub struct FakeApi {
    inner: Mutex<Inner>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        let api = Self::new();
        {
            let mut inner = api.inner.lock();
            inner.next_id = tickets.len() as u64;
            inner.tickets = tickets;
        }
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.inner.lock().calls.iter().filter(|c| matches(c)).count()
    }

    pub fn list_calls(&self) -> usize {
        self.count(|c| matches!(c, Call::List(_)))
    }

    pub fn stats_calls(&self) -> usize {
        self.count(|c| matches!(c, Call::Stats))
    }

    pub fn classify_calls(&self) -> Vec<String> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Classify(description) => Some(description.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn push_list(&self, result: Result<Vec<Ticket>>) {
        self.inner.lock().list.push_back(result);
    }

    pub fn push_create(&self, result: Result<Ticket>) {
        self.inner.lock().create.push_back(result);
    }

    pub fn push_update(&self, result: Result<Ticket>) {
        self.inner.lock().update.push_back(result);
    }

    pub fn push_classify(&self, result: Result<Classification>) {
        self.inner.lock().classify.push_back(result);
    }

    pub fn push_stats(&self, result: Result<TicketStats>) {
        self.inner.lock().stats.push_back(result);
    }
}

impl TicketApi for FakeApi {
    async fn list_tickets(&self, query: &TicketQuery) -> Result<Vec<Ticket>> {
        let mut inner = self.inner.lock();
        inner.calls.push(Call::List(query.clone()));
        if let Some(result) = inner.list.pop_front() {
            return result;
        }
        Ok(inner
            .tickets
            .iter()
            .filter(|t| query.category.is_none_or(|c| t.category == c))
            .filter(|t| query.priority.is_none_or(|p| t.priority == p))
            .filter(|t| query.status.is_none_or(|s| t.status == s))
            .filter(|t| {
                query.search.as_deref().is_none_or(|s| {
                    t.title.contains(s) || t.description.contains(s)
                })
            })
            .cloned()
            .collect())
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
        let mut inner = self.inner.lock();
        inner.calls.push(Call::Create(ticket.clone()));
        if let Some(result) = inner.create.pop_front() {
            return result;
        }
        inner.next_id += 1;
        let created = Ticket {
            id: TicketId::new(inner.next_id.to_string()),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            category: ticket.category,
            priority: ticket.priority,
            status: TicketStatus::Open,
            created_at: "2024-01-05T15:04:05Z".to_string(),
        };
        inner.tickets.insert(0, created.clone());
        Ok(created)
    }

    async fn update_status(&self, id: &TicketId, status: TicketStatus) -> Result<Ticket> {
        let mut inner = self.inner.lock();
        inner.calls.push(Call::UpdateStatus(id.clone(), status));
        if let Some(result) = inner.update.pop_front() {
            return result;
        }
        match inner.tickets.iter_mut().find(|t| t.id == *id) {
            Some(ticket) => {
                ticket.status = status;
                Ok(ticket.clone())
            }
            None => Err(helpdesk::error::HelpdeskError::Other(format!(
                "no ticket {id}"
            ))),
        }
    }

    async fn classify(&self, description: &str) -> Result<Classification> {
        let mut inner = self.inner.lock();
        inner.calls.push(Call::Classify(description.to_string()));
        inner.classify.pop_front().unwrap_or_else(|| Ok(Classification::default()))
    }

    async fn stats(&self) -> Result<TicketStats> {
        let mut inner = self.inner.lock();
        inner.calls.push(Call::Stats);
        inner.stats.pop_front().unwrap_or_else(|| {
            let total = inner.tickets.len() as u64;
            let open = inner
                .tickets
                .iter()
                .filter(|t| t.status == TicketStatus::Open)
                .count() as u64;
            Ok(TicketStats {
                total_tickets: total,
                open_tickets: open,
                ..TicketStats::default()
            })
        })
    }
}
