//! Shared TUI components
//!
//! Reusable pieces for the dashboard: cards, selectors, search, chrome.

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod search_box;
pub mod select;
pub mod ticket_card;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, form_shortcuts, list_shortcuts, search_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use select::{Select, SelectProps, Selectable, cycle_filter, filter_label};
pub use ticket_card::{TicketCard, TicketCardProps};
pub use toast::{TOAST_LIFETIME, Toast, render_toast};
