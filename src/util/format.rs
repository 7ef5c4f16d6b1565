//! Display formatting for money and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const SHORT_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day padding:none] [month repr:short] [year]");
const LONG_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day padding:none] [month repr:long] [year]");

/// Rupee amount with Indian digit grouping: `₹25,000`, `₹1,00,000`.
pub fn format_inr(amount: u32) -> String {
    format!("₹{}", format_count(amount))
}

/// Count with Indian digit grouping: `1,247`, `12,34,567`.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// `2024-01-15T10:30:00Z` or `2024-01-15` as `15 Jan 2024`.
///
/// Unparsable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    render_date(value, SHORT_DATE)
}

/// Same as [`format_date`] with the full month name: `1 February 2024`.
pub fn format_date_long(value: &str) -> String {
    render_date(value, LONG_DATE)
}

fn parse_date(value: &str) -> Option<Date> {
    let value = value.trim();
    OffsetDateTime::parse(value, &Rfc3339)
        .map(OffsetDateTime::date)
        .or_else(|_| Date::parse(value, ISO_DATE))
        .ok()
}

fn render_date(value: &str, layout: &[BorrowedFormatItem<'_>]) -> String {
    parse_date(value).and_then(|date| date.format(layout).ok()).unwrap_or_else(|| value.to_owned())
}
