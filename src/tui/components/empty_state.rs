//! Empty state component
//!
//! Displays a centered message when the list has nothing to show.

use iocraft::prelude::*;

use crate::desk::EmptyReason;
use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// The service has no tickets yet
    #[default]
    NoTickets,
    /// No tickets match the active filters
    NoMatches,
    /// First fetch still running
    Loading,
}

impl From<EmptyReason> for EmptyStateKind {
    fn from(reason: EmptyReason) -> Self {
        match reason {
            EmptyReason::NoTickets => EmptyStateKind::NoTickets,
            EmptyReason::NoMatches => EmptyStateKind::NoMatches,
        }
    }
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, message, hint) = match props.kind {
        EmptyStateKind::NoTickets => (
            "i",
            EmptyReason::NoTickets.message(),
            "Press 'n' to open the new ticket form.",
        ),
        EmptyStateKind::NoMatches => (
            "?",
            EmptyReason::NoMatches.message(),
            "Press 'x' to clear all filters.",
        ),
        EmptyStateKind::Loading => ("~", "Loading tickets...", ""),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: theme.text_dimmed,
                    weight: Weight::Bold,
                )
            }

            View(max_width: 60) {
                Text(
                    content: message,
                    color: theme.text,
                )
            }

            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 1) {
                        Text(
                            content: hint,
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}
