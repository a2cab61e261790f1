//! Transient confirmation banner

use iocraft::prelude::*;
use std::time::{Duration, Instant};

use crate::tui::theme::theme;

/// How long a toast stays on screen
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_LIFETIME
    }
}

/// Nothing when no toast is showing
pub fn render_toast(toast: Option<&Toast>) -> Option<AnyElement<'static>> {
    let theme = theme();
    toast.map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: theme.success,
            ) {
                Text(content: t.message.clone(), color: theme.success)
            }
        }
        .into_any()
    })
}
