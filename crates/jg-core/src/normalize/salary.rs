use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::Currency;

static RE_NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-\s]").unwrap());

/// Extracts salary bounds from a free-text figure like `"$40,000 - $50,000"`.
///
/// Everything except digits, `.`, `-` and whitespace is stripped, the rest is
/// split on whitespace and parsed per token. No numbers → both bounds absent;
/// one number → both bounds equal; two or more → first/second, swapped if the
/// feed listed them high-to-low. The returned pair always satisfies min ≤ max.
pub fn parse_salary_range(raw: &str) -> (Option<u64>, Option<u64>) {
    let cleaned = RE_NON_NUMERIC.replace_all(raw, "");
    let numbers: Vec<f64> = cleaned
        .split_whitespace()
        .filter_map(|token| token.parse::<f64>().ok())
        // A token glued to a range hyphen ("-50000") parses negative; that
        // hyphen is a separator, not a sign, so the token is noise.
        .filter(|n| *n >= 0.0)
        .collect();

    match numbers.as_slice() {
        [] => (None, None),
        [single] => {
            let value = *single as u64;
            (Some(value), Some(value))
        }
        [first, second, ..] => {
            let mut min = *first as u64;
            let mut max = *second as u64;
            if min > max {
                std::mem::swap(&mut min, &mut max);
            }
            (Some(min), Some(max))
        }
    }
}

/// Currency from symbols or ISO codes in the original string, fixed priority
/// order. Dollar figures and unmarked strings are USD.
pub fn detect_currency(raw: &str) -> Currency {
    if raw.contains('€') || raw.contains("EUR") {
        return Currency::Eur;
    }
    if raw.contains('£') || raw.contains("GBP") {
        return Currency::Gbp;
    }
    if raw.contains('₹') || raw.contains("INR") {
        return Currency::Inr;
    }
    Currency::Usd
}
