//! App header bar component
//!
//! Displays the application title, the service origin and a busy marker.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps<'a> {
    /// Title (defaults to "Helpdesk")
    pub title: Option<&'a str>,

    /// Service origin shown on the right
    pub origin: Option<String>,

    /// Whether any request is outstanding
    pub busy: bool,
}

/// App header bar showing title and service origin
#[component]
pub fn Header<'a>(props: &HeaderProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let title = props.title.unwrap_or("Helpdesk");

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: title,
                color: theme.highlight_text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 1) {
                #(props.busy.then(|| element! {
                    Text(content: "~", color: theme.highlight_text, weight: Weight::Bold)
                }))
                #(props.origin.clone().map(|origin| element! {
                    Text(content: origin, color: theme.highlight_text)
                }))
            }
        }
    }
}
