// src/core/numeric.rs
//
// Best-effort number extraction from rendered text: the first token wins,
// units and currency symbols are ignored, nothing is range-checked.

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("decimal token pattern"));
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("integer token pattern"));

/// First `digits[.digits]` token, e.g. `"$45.00 to $60.00"` → `45.0`.
pub fn first_decimal(text: &str) -> Option<f64> {
    DECIMAL
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// First run of digits, e.g. `"35% off"` → `35`.
pub fn first_integer(text: &str) -> Option<i64> {
    INTEGER.find(text).and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Lowercased first whitespace-delimited token of a title.
pub fn first_word_lower(title: &str) -> Option<String> {
    title.split_whitespace().next().map(|w| w.to_lowercase())
}
