use std::collections::BTreeMap;

use serde_json::json;

use crate::api::{TicketApi, TicketQuery};
use crate::commands::{format_ticket_line, print_json};
use crate::desk::EmptyReason;
use crate::error::Result;
use crate::utils::pluralize_tickets;

/// List tickets matching the given filters, newest first
pub async fn cmd_ls<A: TicketApi>(api: &A, query: TicketQuery, output_json: bool) -> Result<()> {
    tracing::debug!(?query, "listing tickets");
    let tickets = api.list_tickets(&query).await?;

    if output_json {
        return print_json(&json!({
            "query": query.to_pairs().into_iter().collect::<BTreeMap<_, _>>(),
            "count": tickets.len(),
            "tickets": tickets,
        }));
    }

    if tickets.is_empty() {
        let reason = if query.is_unconstrained() {
            EmptyReason::NoTickets
        } else {
            EmptyReason::NoMatches
        };
        println!("{}", reason.message());
        return Ok(());
    }

    for ticket in &tickets {
        println!("{}", format_ticket_line(ticket));
    }
    println!("\n{}", pluralize_tickets(tickets.len()));

    Ok(())
}
