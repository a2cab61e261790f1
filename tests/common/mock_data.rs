//! Builders for tickets and stats used across tests.

use helpdesk::types::{
    Breakdown, BreakdownEntry, Ticket, TicketCategory, TicketId, TicketPriority, TicketStats,
    TicketStatus,
};

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: TicketId::new(id),
                title: format!("Ticket {id}"),
                description: "Something is wrong".to_string(),
                category: TicketCategory::General,
                priority: TicketPriority::Medium,
                status: TicketStatus::Open,
                created_at: "2024-01-05T15:04:05Z".to_string(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.ticket.description = description.to_string();
        self
    }

    pub fn category(mut self, category: TicketCategory) -> Self {
        self.ticket.category = category;
        self
    }

    pub fn priority(mut self, priority: TicketPriority) -> Self {
        self.ticket.priority = priority;
        self
    }

    pub fn status(mut self, status: TicketStatus) -> Self {
        self.ticket.status = status;
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Quick helper for a ticket with just an id and status
pub fn mock_ticket(id: &str, status: TicketStatus) -> Ticket {
    TicketBuilder::new(id).status(status).build()
}

pub fn breakdown(entries: &[(&str, u64)]) -> Breakdown {
    Breakdown(
        entries
            .iter()
            .map(|(key, count)| BreakdownEntry {
                key: key.to_string(),
                count: *count,
            })
            .collect(),
    )
}

pub fn mock_stats(total: u64, open: u64) -> TicketStats {
    TicketStats {
        total_tickets: total,
        open_tickets: open,
        avg_tickets_per_day: 1.5,
        priority_breakdown: breakdown(&[("low", 1), ("critical", 2)]),
        category_breakdown: breakdown(&[("billing", 3)]),
    }
}

/// JSON body for a ticket, as the service would send it
pub fn ticket_json(ticket: &Ticket) -> String {
    serde_json::to_string(ticket).expect("ticket serializes")
}
