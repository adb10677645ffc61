//! Console rendering of a [`Summary`].
//!
//! Values always carry two fractional digits, rounded half up on the
//! shortest decimal form of the number (`0.125` prints as `0,13`). The
//! decimal point is replaced by the configured separator, which defaults to
//! a comma (`55,00`).

use std::str::FromStr;

// used to round on the decimal digits rather than the binary value
use bigdecimal::{BigDecimal, RoundingMode};

use crate::statistics::Summary;

pub const DEFAULT_DECIMAL_SEPARATOR: char = ',';

pub fn format_value(value: f64, separator: char) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{sign}Infinity");
    }
    // f64 Display is the shortest string that reads back to the same value
    let mut rendered = match BigDecimal::from_str(&value.to_string()) {
        Ok(decimal) => decimal.with_scale_round(2, RoundingMode::HalfUp).to_plain_string(),
        Err(_) => format!("{value:.2}"),
    };
    // a negative value rounding to zero keeps its sign, e.g. -0,00
    if value.is_sign_negative() && !rendered.starts_with('-') {
        rendered.insert(0, '-');
    }
    rendered.replacen('.', &separator.to_string(), 1)
}

pub fn render(summary: &Summary, separator: char) -> String {
    format!(
        "Mean: {}\nStandard Deviation: {}\n",
        format_value(summary.mean(), separator),
        format_value(summary.standard_deviation(), separator)
    )
}
