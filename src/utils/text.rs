//! Text truncation and labelling helpers
//!
//! All lengths are counted in characters, not bytes, so multi-byte input is
//! never split mid-character.

/// Keep the first `max_len` characters and append "..." when anything was cut.
///
/// Unlike a width-bounded truncation, the ellipsis is not counted against
/// `max_len`: a 151-character description becomes 150 characters plus "...".
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len).collect();
        format!("{kept}...")
    }
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a float without a trailing ".0" for whole numbers
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// "1 ticket", "3 tickets"
pub fn pluralize_tickets(count: usize) -> String {
    if count == 1 {
        "1 ticket".to_string()
    } else {
        format!("{count} tickets")
    }
}
