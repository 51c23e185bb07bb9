//! String formatting utilities for UI rendering.

use tally_core::Money;

/// Digits needed in the integer part before es-ES inserts group separators.
const MIN_GROUPED_DIGITS: usize = 5;

/// Format an amount the es-ES way: `1234,56 €`, `12.345,67 €`.
///
/// Thousands are only separated once the integer part reaches five digits.
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let sign = if amount.cents() < 0 { "-" } else { "" };
    let digits = amount.units().unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let group = digits.len() >= MIN_GROUPED_DIGITS;
    for (i, ch) in digits.chars().enumerate() {
        if group && i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let number = format!("{}{},{:02}", sign, grouped, amount.fraction().abs());
    if symbol.is_empty() {
        number
    } else {
        format!("{} {}", number, symbol)
    }
}

/// Percentage with one decimal, e.g. `66.7%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format bytes as human-readable size.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
