//! Executes model effects against a `TicketApi`.

use futures::future::join_all;

use crate::api::TicketApi;

use super::model::{DeskModel, Effect, Outcome};

/// Send one request and wrap its response for the model
pub async fn run_effect<A: TicketApi>(api: &A, effect: Effect) -> Outcome {
    match effect {
        Effect::Classify { token, description } => Outcome::Classified {
            token,
            result: api.classify(&description).await,
        },
        Effect::CreateTicket { ticket } => Outcome::Created {
            result: api.create_ticket(&ticket).await,
        },
        Effect::FetchTickets { token, query } => Outcome::TicketsFetched {
            token,
            result: api.list_tickets(&query).await,
        },
        Effect::UpdateStatus { id, status } => {
            let result = api.update_status(&id, status).await;
            Outcome::StatusUpdated { id, result }
        }
        Effect::FetchStats { token } => Outcome::StatsFetched {
            token,
            result: api.stats().await,
        },
    }
}

/// Run a batch of effects concurrently; outcomes come back in effect order
pub async fn run_effects<A: TicketApi>(api: &A, effects: Vec<Effect>) -> Vec<Outcome> {
    join_all(effects.into_iter().map(|effect| run_effect(api, effect))).await
}

/// Run effects, apply their outcomes, and repeat until the model asks for nothing more
pub async fn settle<A: TicketApi>(api: &A, model: &mut DeskModel, effects: Vec<Effect>) {
    let mut pending = effects;
    while !pending.is_empty() {
        let outcomes = run_effects(api, std::mem::take(&mut pending)).await;
        for outcome in outcomes {
            pending.extend(model.apply(outcome));
        }
    }
}
