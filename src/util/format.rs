//! Display formatting for timestamps, money, and names.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate};

/// Render an ISO-8601 timestamp as e.g. `May 3, 2025`.
///
/// The service occasionally hands back bare dates or garbage on legacy
/// rows; unparseable non-empty input is shown as-is and empty input as a
/// dash so table cells never go blank.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "—".to_owned();
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return timestamp.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    trimmed.to_owned()
}

/// Naira amount with thousands separators, e.g. `₦9,500.00`.
pub fn format_naira(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if negative { "-" } else { "" };
    format!("{sign}₦{}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// First `max` characters of `value`, with an ellipsis when shortened.
/// Used for hashes and URLs that would otherwise blow out table cells.
pub fn truncate_chars(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_owned();
    }
    let mut shortened: String = value.chars().take(max).collect();
    shortened.push('…');
    shortened
}

/// `firstname lastname`, tolerating either part being blank.
pub fn full_name(firstname: &str, lastname: &str) -> String {
    let joined = format!("{} {}", firstname.trim(), lastname.trim());
    let joined = joined.trim();
    if joined.is_empty() {
        "Unknown".to_owned()
    } else {
        joined.to_owned()
    }
}
