//! Interactive dashboard (`helpdesk desk`)
//!
//! The root component is [`DeskApp`]; everything it knows about tickets lives
//! in [`crate::desk::DeskModel`]. Modules here only handle focus, keys and
//! layout.

pub mod app;
pub mod components;
pub mod form;
pub mod keymap;
pub mod list_pane;
pub mod navigation;
pub mod state;
pub mod stats_panel;
pub mod theme;

pub use app::{DeskApp, DeskAppProps};
pub use keymap::{KeyAction, Mode, key_to_action};
pub use state::{Pane, UiState};
pub use theme::Theme;
