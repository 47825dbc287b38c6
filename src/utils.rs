//! Shared helpers for literal matching and score rounding.

use regex::{Regex, RegexBuilder};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Compile `needle` as literal text matched case-insensitively.
///
/// Returns `None` only when the escaped pattern exceeds the regex size limit.
/// Callers then fall back to full lowercasing, which only approximates the
/// simple case folding of the regex path: characters whose lowercase form
/// changes length can shift positions and match counts.
fn literal_pattern(needle: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(
                needle_len = needle.len(),
                error = %err,
                "literal pattern rejected, falling back to lowercase search"
            );
            None
        }
    }
}

/// Whether `needle` occurs anywhere in `haystack`, ignoring case.
pub(crate) fn contains_literal_ci(haystack: &str, needle: &str) -> bool {
    match literal_pattern(needle) {
        Some(re) => re.is_match(haystack),
        None => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Count non-overlapping occurrences of `needle` in `haystack`, ignoring case.
pub(crate) fn count_literal_ci(haystack: &str, needle: &str) -> usize {
    match literal_pattern(needle) {
        Some(re) => re.find_iter(haystack).count(),
        None => haystack
            .to_lowercase()
            .matches(needle.to_lowercase().as_str())
            .count(),
    }
}

/// Round to a fixed number of decimal places, ties to even.
///
/// Ties are decided on the exact binary value, so `44.125` rounds to `44.12`
/// while `2.675` (stored just below the tie) rounds to `2.67`. Non-finite
/// values are returned unchanged.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
