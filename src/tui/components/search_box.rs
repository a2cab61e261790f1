//! Search input component
//!
//! Keystrokes go straight into the list's search buffer; the list applies the
//! text once typing pauses.

use std::time::Instant;

use iocraft::prelude::*;

use crate::desk::{Action, DeskModel};
use crate::tui::theme::theme;

/// Props for the SearchBox component
#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// Dashboard state the input writes into
    pub model: Option<State<DeskModel>>,
    /// Whether the search box has focus
    pub has_focus: bool,
}

/// Search input with a "/" prefix
#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let Some(mut model) = props.model else {
        return element! {
            View(
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                height: 3,
            ) {
                Text(content: "Search unavailable", color: theme.text_dimmed)
            }
        };
    };

    let value = model.read().list.search_input().to_string();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
        ) {
            View(
                margin_right: 1,
                justify_content: JustifyContent::Center,
            ) {
                Text(
                    content: "/",
                    color: theme.text_dimmed,
                )
            }
            View(flex_grow: 1.0) {
                TextInput(
                    value: value,
                    has_focus: props.has_focus,
                    on_change: move |new_value: String| {
                        model
                            .write()
                            .handle(Action::SearchInput(new_value), Instant::now());
                    },
                    color: theme.text,
                )
            }
        }
    }
}
