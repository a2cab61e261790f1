use serde_json::json;

use super::{CommandOutput, format_ticket_detail};
use crate::api::TicketApi;
use crate::error::Result;
use crate::types::{TicketId, TicketStatus};

/// Change a ticket's status
pub async fn cmd_status<A: TicketApi>(
    api: &A,
    id: &str,
    status: TicketStatus,
    output_json: bool,
) -> Result<()> {
    let id = TicketId::new(id);
    let ticket = api.update_status(&id, status).await?;
    tracing::debug!(id = %ticket.id, status = status.as_str(), "status updated");

    CommandOutput::new(json!({
        "id": ticket.id,
        "action": "status_changed",
        "new_status": ticket.status,
        "ticket": ticket,
    }))
    .with_text(format!(
        "Updated #{} -> {}\n{}",
        ticket.id,
        ticket.status.label(),
        format_ticket_detail(&ticket)
    ))
    .print(output_json)
}
