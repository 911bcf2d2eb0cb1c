use ratatui::text::{Line, Span};

use super::theme;
use crate::engine::NOT_AVAILABLE;

/// Text for an optional field, `N/A` when absent
pub fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// Quantities are rendered as integers; an absent quantity shows as 0
pub fn fmt_quantity(quantity: Option<i64>) -> String {
    quantity.unwrap_or(0).to_string()
}

/// `Label: value` row for detail views; absent values render muted
pub fn detail_line<'a>(label: &'a str, value: Option<&str>, fallback: &'a str) -> Line<'a> {
    let value_span = match value {
        Some(value) => Span::raw(value.to_string()),
        None => Span::styled(fallback, theme::muted_style()),
    };

    Line::from(vec![
        Span::styled(format!("{:<18}", format!("{}:", label)), theme::label_style()),
        value_span,
    ])
}

/// Mask a secret for display, one bullet per character
pub fn masked(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}
