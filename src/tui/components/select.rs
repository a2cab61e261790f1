//! Compact inline selector component for enum fields
//!
//! Displays as: Label: ◀ value ▶. Values are cycled with the left/right
//! arrows (form) or the filter keys (list).

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{TicketCategory, TicketPriority, TicketStatus};

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps<'a> {
    /// Label to display before the selector
    pub label: Option<&'a str>,
    /// Text of the current value
    pub value: String,
    /// Whether the selector has focus
    pub has_focus: bool,
    /// Whether the selector is disabled (e.g. while a request is in flight)
    pub disabled: bool,
    /// Optional color for the value (for semantic coloring like status/priority)
    pub value_color: Option<Color>,
}

/// Compact inline selector component with arrow indicators
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let chrome_color = if props.has_focus && !props.disabled {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let value_color = if props.disabled {
        theme.text_dimmed
    } else {
        props.value_color.unwrap_or(theme.text)
    };

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(
                    content: format!("{}:", label),
                    color: chrome_color,
                )
            }))
            Text(content: "◀", color: chrome_color)
            Text(
                content: props.value.clone(),
                color: value_color,
            )
            Text(content: "▶", color: chrome_color)
        }
    }
}

/// Helper trait for types that can be used with Select
pub trait Selectable: Sized + Clone + Copy + PartialEq + 'static {
    /// Get all possible values for this type
    fn all_values() -> &'static [Self];
    /// Get the display string for this value
    fn display(&self) -> &'static str;
    /// Get the index of this value in all_values
    fn index(&self) -> usize {
        Self::all_values()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }
    /// Get the next value (wrapping)
    fn next(&self) -> Self {
        let values = Self::all_values();
        values[(self.index() + 1) % values.len()]
    }
    /// Get the previous value (wrapping)
    fn prev(&self) -> Self {
        let values = Self::all_values();
        values[(self.index() + values.len() - 1) % values.len()]
    }
}

impl Selectable for TicketCategory {
    fn all_values() -> &'static [Self] {
        &TicketCategory::ALL
    }

    fn display(&self) -> &'static str {
        self.label()
    }
}

impl Selectable for TicketPriority {
    fn all_values() -> &'static [Self] {
        &TicketPriority::ALL
    }

    fn display(&self) -> &'static str {
        self.label()
    }
}

impl Selectable for TicketStatus {
    fn all_values() -> &'static [Self] {
        &TicketStatus::ALL
    }

    fn display(&self) -> &'static str {
        self.label()
    }
}

/// Step an optional filter value: "all" sits before the first value and after the last
pub fn cycle_filter<T: Selectable>(current: Option<T>, forward: bool) -> Option<T> {
    let values = T::all_values();
    match (current, forward) {
        (None, true) => values.first().copied(),
        (None, false) => values.last().copied(),
        (Some(value), true) if value.index() + 1 == values.len() => None,
        (Some(value), false) if value.index() == 0 => None,
        (Some(value), true) => Some(value.next()),
        (Some(value), false) => Some(value.prev()),
    }
}

/// Label for an optional filter value, e.g. "All Categories"
pub fn filter_label<T: Selectable>(current: Option<T>, all_label: &'static str) -> &'static str {
    current.map(|v| v.display()).unwrap_or(all_label)
}
