//! Aggregate statistics panel.

use crate::error::Result;
use crate::types::{Breakdown, TicketStats};
use crate::utils::{capitalize, format_decimal};

use super::model::Effect;
use super::sequence::{RequestSequence, RequestToken};

pub const STATS_FAILED: &str = "Failed to load statistics. Please try again.";

/// Exactly one of these is shown at a time
#[derive(Debug, Clone, PartialEq)]
pub enum StatsView {
    Loading,
    Error(String),
    Loaded(TicketStats),
}

#[derive(Debug, Clone)]
pub struct StatsPanel {
    view: StatsView,
    requests: RequestSequence,
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsPanel {
    pub fn new() -> Self {
        Self {
            view: StatsView::Loading,
            requests: RequestSequence::new(),
        }
    }

    pub fn view(&self) -> &StatsView {
        &self.view
    }

    pub fn stats(&self) -> Option<&TicketStats> {
        match &self.view {
            StatsView::Loaded(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn fetch(&mut self) -> Effect {
        self.view = StatsView::Loading;
        let token = self.requests.issue();
        tracing::debug!(token = token.value(), "fetching stats");
        Effect::FetchStats { token }
    }

    pub fn apply_fetched(&mut self, token: RequestToken, result: Result<TicketStats>) {
        if !self.requests.finish(token) {
            tracing::debug!(token = token.value(), "discarding stale stats");
            return;
        }

        self.view = match result {
            Ok(stats) => StatsView::Loaded(stats),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stats");
                StatsView::Error(STATS_FAILED.to_string())
            }
        };
    }
}

/// Headline figures as `(value, label)` pairs
pub fn headline(stats: &TicketStats) -> [(String, &'static str); 3] {
    [
        (stats.total_tickets.to_string(), "Total Tickets"),
        (stats.open_tickets.to_string(), "Open Tickets"),
        (format_decimal(stats.avg_tickets_per_day), "Avg Tickets/Day"),
    ]
}

/// Breakdown rows with capitalized labels, in the order the service sent them
pub fn breakdown_rows(breakdown: &Breakdown) -> Vec<(String, u64)> {
    breakdown
        .entries()
        .iter()
        .map(|entry| (capitalize(&entry.key), entry.count))
        .collect()
}
