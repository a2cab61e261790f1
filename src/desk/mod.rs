//! Client-side state synchronization for the ticket dashboard.
//!
//! Everything here is framework-independent: the TUI and the tests both drive
//! [`DeskModel`] through actions, timer ticks and request outcomes.

pub mod card;
pub mod debounce;
pub mod driver;
pub mod form;
pub mod list;
pub mod model;
pub mod optimistic;
pub mod refresh;
pub mod sequence;
pub mod stats;

pub use card::{CardState, STATUS_UPDATE_FAILED};
pub use debounce::Debouncer;
pub use driver::{run_effect, run_effects, settle};
pub use form::{CREATE_FAILED, FieldUpdate, FormField, TicketForm};
pub use list::{EmptyReason, FilterUpdate, LOAD_FAILED, TicketList};
pub use model::{Action, DeskModel, Effect, Outcome};
pub use optimistic::Optimistic;
pub use refresh::{RefreshCounter, RefreshWatcher};
pub use sequence::{RequestSequence, RequestToken};
pub use stats::{STATS_FAILED, StatsPanel, StatsView};
