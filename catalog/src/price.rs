//! USD price formatting in the storefront's `es-ES` display style.
//!
//! Comma decimal separator, `.` thousands separator, and a non-breaking space
//! before `US$`. The locale only groups once the integer part reaches five
//! digits, so `1234,00 US$` stays ungrouped while `12.345,00 US$` does not.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

const CURRENCY_SUFFIX: &str = "\u{a0}US$";
const MIN_GROUPING_DIGITS: usize = 5;

/// Format a price for display.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_price(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("0,00{CURRENCY_SUFFIX}");
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = if whole.len() >= MIN_GROUPING_DIGITS { group_thousands(&whole) } else { whole };
    format!("{sign}{whole},{fraction:02}{CURRENCY_SUFFIX}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
