//! Statistics side panel

use iocraft::prelude::*;

use crate::desk::{StatsPanel as StatsState, StatsView};
use crate::desk::stats::{breakdown_rows, headline};
use crate::tui::theme::theme;
use crate::types::Breakdown;

#[derive(Default, Props)]
pub struct StatsPanelProps {
    pub stats: Option<StatsState>,
}

#[component]
pub fn StatsPanel(props: &StatsPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let view = props
        .stats
        .as_ref()
        .map(|s| s.view().clone())
        .unwrap_or(StatsView::Loading);

    let body: AnyElement<'static> = match view {
        StatsView::Loading => element! {
            Text(content: "Loading statistics...", color: theme.text_dimmed)
        }
        .into_any(),
        StatsView::Error(message) => element! {
            Text(content: message, color: theme.error)
        }
        .into_any(),
        StatsView::Loaded(stats) => {
            let figures = headline(&stats);
            element! {
                View(flex_direction: FlexDirection::Column, gap: 1) {
                    #(figures.into_iter().map(|(value, label)| element! {
                        View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                            Text(content: label, color: theme.text_dimmed)
                            Text(content: value, color: theme.highlight, weight: Weight::Bold)
                        }
                    }))
                    #(breakdown_section("By Priority", &stats.priority_breakdown))
                    #(breakdown_section("By Category", &stats.category_breakdown))
                }
            }
            .into_any()
        }
    };

    element! {
        View(
            width: 32,
            height: 100pct,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: "Statistics", color: theme.text, weight: Weight::Bold)
            View(margin_top: 1) {
                #(Some(body))
            }
        }
    }
}

/// A titled list of breakdown rows; nothing when the breakdown is empty
fn breakdown_section(title: &'static str, breakdown: &Breakdown) -> Option<AnyElement<'static>> {
    if breakdown.is_empty() {
        return None;
    }
    let theme = theme();
    let rows: Vec<_> = breakdown
        .entries()
        .iter()
        .zip(breakdown_rows(breakdown))
        .map(|(entry, (label, count))| (theme.breakdown_color(&entry.key), label, count))
        .collect();

    Some(
        element! {
            View(flex_direction: FlexDirection::Column) {
                Text(content: title, color: theme.text, weight: Weight::Bold)
                #(rows.into_iter().map(|(color, label, count)| element! {
                    View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                        Text(content: label, color: color)
                        Text(content: count.to_string(), color: theme.text)
                    }
                }))
            }
        }
        .into_any(),
    )
}
