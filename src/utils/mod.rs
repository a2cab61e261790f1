pub mod text;
pub mod time;

pub use text::{capitalize, format_decimal, pluralize_tickets, truncate_with_ellipsis};
pub use time::{format_timestamp, format_timestamp_in};
