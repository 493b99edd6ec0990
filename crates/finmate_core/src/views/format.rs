//! crates/finmate_core/src/views/format.rs
//!
//! Presentation helpers matching en-US number and date formatting.

use chrono::NaiveDate;

/// Formats an amount with comma thousands separators and at most three
/// fraction digits, dropping trailing zeros (`1234.5` -> `"1,234.5"`).
pub fn format_amount(amount: f64) -> String {
    let text = format!("{:.3}", amount.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + whole.len() / 3 + 1);
    let is_zero = whole == "0" && fraction.is_empty();
    if amount < 0.0 && !is_zero {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats a date as `M/D/YYYY` without zero padding.
pub fn format_deadline(deadline: NaiveDate) -> String {
    deadline.format("%-m/%-d/%Y").to_string()
}
