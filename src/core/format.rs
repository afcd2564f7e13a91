//! Display formatting for report values.
//!
//! All report output goes through these helpers so the PDF and the plain-text
//! rendering agree on every number: currency with two decimals and a symbol
//! suffix, counts with thousands separators, percentages and ratings with one
//! decimal.

use rust_decimal::Decimal;

use super::currency::Currency;

/// Formats a monetary amount, e.g. `1 234,56 €`.
///
/// French-style grouping (space) and decimal comma, matching the platform's
/// locale. Always two decimal places.
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    let rounded = currency.round(amount);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
        None => (text, "00".to_string()),
    };
    let sign = if negative { "-" } else { "" };
    format!(
        "{}{},{} {}",
        sign,
        group_thousands(&int_part),
        frac_part,
        currency.symbol()
    )
}

/// Formats an integer count with thousands separators, e.g. `1 234`.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Formats a ratio already expressed as a percentage, e.g. `85.3%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formats a rating out of five, e.g. `4.2/5`.
pub fn format_rating(value: f64) -> String {
    format!("{:.1}/5", value)
}

/// Formats a distance in kilometers, e.g. `12.4 km`.
pub fn format_distance(value: f64) -> String {
    format!("{:.1} km", value)
}

/// Formats a duration in whole minutes, e.g. `245 min`.
pub fn format_minutes(value: f64) -> String {
    format!("{:.0} min", value)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}
