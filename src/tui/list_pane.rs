//! Ticket list pane: search, filter row, and the visible window of cards

use iocraft::prelude::*;

use crate::desk::DeskModel;
use crate::tui::components::{
    EmptyState, EmptyStateKind, SearchBox, TicketCard, filter_label,
};
use crate::tui::theme::theme;

/// Rows one card occupies, including its border
pub const CARD_HEIGHT: usize = 5;

/// Props for the TicketListPane component
#[derive(Default, Props)]
pub struct TicketListPaneProps {
    pub model: Option<State<DeskModel>>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Number of cards that fit on screen
    pub visible_cards: usize,
    pub search_focused: bool,
    pub list_focused: bool,
}

#[component]
pub fn TicketListPane(props: &TicketListPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(model) = props.model else {
        return element! { View() };
    };

    let desk = model.read();
    let list = &desk.list;
    let filters = list.filters().clone();
    let count_label = list.count_label();
    let error = list.error().map(str::to_string);
    let loading = list.is_loading();
    let empty = match list.empty_reason() {
        Some(reason) => Some(EmptyStateKind::from(reason)),
        None if loading && list.cards().is_empty() => Some(EmptyStateKind::Loading),
        None => None,
    };
    let total = list.cards().len();
    let visible: Vec<_> = list
        .cards()
        .iter()
        .enumerate()
        .skip(props.scroll_offset)
        .take(props.visible_cards.max(1))
        .map(|(index, card)| (index, card.clone()))
        .collect();
    drop(desk);

    let hidden_above = props.scroll_offset.min(total);
    let hidden_below = total.saturating_sub(hidden_above + visible.len());
    let selected_index = props.selected_index;
    let list_focused = props.list_focused;

    element! {
        View(
            flex_grow: 1.0,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 2, flex_shrink: 0.0) {
                Text(content: "Support Tickets", color: theme.text, weight: Weight::Bold)
                #(count_label.map(|label| element! {
                    Text(content: format!("({})", label), color: theme.text_dimmed)
                }))
                #(loading.then(|| element! {
                    Text(content: "Loading...", color: theme.highlight)
                }))
            }

            SearchBox(model: Some(model), has_focus: props.search_focused)

            View(flex_direction: FlexDirection::Row, gap: 3, flex_shrink: 0.0) {
                Text(
                    content: format!("[c] {}", filter_label(filters.category, "All Categories")),
                    color: if filters.category.is_some() { theme.highlight } else { theme.text_dimmed },
                )
                Text(
                    content: format!("[p] {}", filter_label(filters.priority, "All Priorities")),
                    color: if filters.priority.is_some() { theme.highlight } else { theme.text_dimmed },
                )
                Text(
                    content: format!("[t] {}", filter_label(filters.status, "All Statuses")),
                    color: if filters.status.is_some() { theme.highlight } else { theme.text_dimmed },
                )
            }

            #(error.map(|error| element! {
                View(
                    width: 100pct,
                    flex_shrink: 0.0,
                    border_style: BorderStyle::Single,
                    border_color: theme.error,
                    padding_left: 1,
                ) {
                    Text(content: error, color: theme.error)
                }
            }))

            #(match empty {
                Some(kind) => Some(element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(kind)
                    }
                }.into_any()),
                None => Some(element! {
                    View(
                        flex_grow: 1.0,
                        width: 100pct,
                        flex_direction: FlexDirection::Column,
                        overflow: Overflow::Hidden,
                    ) {
                        #((hidden_above > 0).then(|| element! {
                            Text(content: format!("  {} more above", hidden_above), color: theme.text_dimmed)
                        }))
                        #(visible.into_iter().map(|(index, card)| element! {
                            TicketCard(
                                card: Some(card),
                                is_selected: list_focused && index == selected_index,
                            )
                        }))
                        #((hidden_below > 0).then(|| element! {
                            Text(content: format!("  {} more below", hidden_below), color: theme.text_dimmed)
                        }))
                    }
                }.into_any()),
            })
        }
    }
}
