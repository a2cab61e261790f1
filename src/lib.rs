pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod desk;
pub mod error;
pub mod logging;
pub mod tui;
pub mod types;
pub mod utils;

pub use api::{ApiClient, TicketApi, TicketQuery};
pub use config::{Config, Timing};
pub use desk::{Action, DeskModel, Effect, Outcome};
pub use error::{HelpdeskError, Result};
pub use types::{
    Classification, NewTicket, Ticket, TicketCategory, TicketId, TicketPriority, TicketStats,
    TicketStatus,
};
