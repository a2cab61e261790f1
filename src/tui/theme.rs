//! Theme system for TUI colors and styles
//!
//! Defines color constants consistent with the CLI output (commands/mod.rs).

use iocraft::prelude::Color;

use crate::types::{TicketCategory, TicketPriority, TicketStatus};

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors (consistent with CLI)
    pub status_open: Color,
    pub status_in_progress: Color,
    pub status_resolved: Color,
    pub status_closed: Color,

    // Priority colors
    pub priority_low: Color,
    pub priority_medium: Color,
    pub priority_high: Color,
    pub priority_critical: Color,

    // Category colors
    pub category_billing: Color,
    pub category_technical: Color,
    pub category_account: Color,
    pub category_general: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub error: Color,
    pub success: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_open: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_resolved: Color::Green,
            status_closed: GREY,

            priority_low: GREY,
            priority_medium: Color::White,
            priority_high: Color::Yellow,
            priority_critical: Color::Red,

            category_billing: Color::Magenta,
            category_technical: Color::Blue,
            category_account: Color::Cyan,
            category_general: Color::White,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            error: Color::Red,
            success: Color::Green,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a ticket status
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Open => self.status_open,
            TicketStatus::InProgress => self.status_in_progress,
            TicketStatus::Resolved => self.status_resolved,
            TicketStatus::Closed => self.status_closed,
        }
    }

    /// Get the color for a ticket priority
    pub fn priority_color(&self, priority: TicketPriority) -> Color {
        match priority {
            TicketPriority::Low => self.priority_low,
            TicketPriority::Medium => self.priority_medium,
            TicketPriority::High => self.priority_high,
            TicketPriority::Critical => self.priority_critical,
        }
    }

    /// Get the color for a ticket category
    pub fn category_color(&self, category: TicketCategory) -> Color {
        match category {
            TicketCategory::Billing => self.category_billing,
            TicketCategory::Technical => self.category_technical,
            TicketCategory::Account => self.category_account,
            TicketCategory::General => self.category_general,
        }
    }

    /// Color for a breakdown key, falling back to plain text for unknown keys
    pub fn breakdown_color(&self, key: &str) -> Color {
        if let Ok(priority) = key.parse::<TicketPriority>() {
            self.priority_color(priority)
        } else if let Ok(category) = key.parse::<TicketCategory>() {
            self.category_color(category)
        } else {
            self.text
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
