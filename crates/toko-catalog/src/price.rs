//! Display formatting for rupiah amounts.
//!
//! Grouping is done with manual byte scanning rather than a locale crate;
//! the store renders one currency and the format is fixed.

use toko_core::config::DEFAULT_CURRENCY_PREFIX;

/// Formats a rupiah amount for display: `1_000_000.0` → `"Rp 1.000.000"`.
///
/// Amounts are rounded to whole rupiah and thousands groups are separated
/// with `.` per Indonesian convention. Total over any `f64`: non-finite
/// amounts render as zero rather than panicking.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format_price_with_prefix(DEFAULT_CURRENCY_PREFIX, amount)
}

/// [`format_price`] with a caller-supplied currency prefix, for stores
/// configured with `TOKO_CURRENCY_PREFIX`.
#[must_use]
pub fn format_price_with_prefix(prefix: &str, amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);
    if rounded < 0.0 {
        format!("{prefix} -{grouped}")
    } else {
        format!("{prefix} {grouped}")
    }
}

/// Inserts a `.` before every trailing group of three digits.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(char::from(*b));
    }
    grouped
}
