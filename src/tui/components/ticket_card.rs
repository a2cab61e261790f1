//! Ticket card component for the ticket list
//!
//! Shows the title, status selector, truncated description, category and
//! priority badges, creation time, and the card's own error line.

use iocraft::prelude::*;

use super::select::Select;
use crate::desk::CardState;
use crate::tui::theme::theme;

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The card to display
    pub card: Option<CardState>,
    /// Whether this card is selected
    pub is_selected: bool,
}

/// Layout:
/// ```text
/// ╭──────────────────────────────────────────────╮
/// │> #12 Printer on fire      Status: ◀ Open ▶   │
/// │  The printer on floor 3 is literally on...   │
/// │  technical  critical  Jan 5, 2024, 03:04 PM  │
/// ╰──────────────────────────────────────────────╯
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(card) = props.card.as_ref() else {
        return element! { View() };
    };
    let ticket = card.ticket();

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let indicator = if props.is_selected { ">" } else { " " };
    let status = card.status();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                View(flex_direction: FlexDirection::Row, flex_shrink: 1.0) {
                    Text(content: indicator, color: theme.highlight, weight: Weight::Bold)
                    Text(content: format!("#{} ", ticket.id), color: theme.id_color)
                    Text(
                        content: ticket.title.clone(),
                        color: theme.text,
                        weight: Weight::Bold,
                    )
                }
                View(flex_direction: FlexDirection::Row, gap: 1, flex_shrink: 0.0) {
                    #(card.is_updating().then(|| element! {
                        Text(content: "saving", color: theme.text_dimmed)
                    }))
                    Select(
                        label: Some("Status"),
                        value: status.label().to_string(),
                        has_focus: props.is_selected,
                        disabled: card.is_updating(),
                        value_color: Some(theme.status_color(status)),
                    )
                }
            }
            Text(content: card.description_preview(), color: theme.text_dimmed)
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: ticket.category.as_str(),
                    color: theme.category_color(ticket.category),
                )
                Text(
                    content: ticket.priority.as_str(),
                    color: theme.priority_color(ticket.priority),
                )
                Text(content: card.created_label(), color: theme.text_dimmed)
            }
            #(card.error().map(|error| element! {
                Text(content: error.to_string(), color: theme.error)
            }))
        }
    }
}
