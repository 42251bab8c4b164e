//! Parsing of human-formatted count strings ("12.3K", "4M", "1,234").
//!
//! Source text is scraped from arbitrary markup, so [`parse_count`] is total:
//! any string, however garbled, yields an integer (0 in the worst case)
//! rather than an error.

/// Converts a human-formatted magnitude string into an integer count.
///
/// Handling, in order:
/// 1. Lower-case, then strip thousands-separator commas and all internal
///    whitespace.
/// 2. If a magnitude letter (k/m/b) is present, parse the leading number as
///    a float, scale it (k → 1e3, m → 1e6, b → 1e9), and round to the
///    nearest integer.
/// 3. Otherwise strip every non-digit character and parse the remainder.
///
/// Empty input and unparseable remainders yield 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_count(text: &str) -> u64 {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return 0;
    }

    // First magnitude letter wins; the token may carry trailing label text
    // ("1.2m followers"), so we only parse what precedes the letter.
    let magnitude = cleaned.char_indices().find_map(|(i, c)| match c {
        'k' => Some((i, 1_000.0_f64)),
        'm' => Some((i, 1_000_000.0_f64)),
        'b' => Some((i, 1_000_000_000.0_f64)),
        _ => None,
    });

    if let Some((pos, scale)) = magnitude {
        if let Ok(value) = cleaned[..pos].parse::<f64>() {
            if value.is_finite() {
                // Counts are non-negative; clamp instead of wrapping.
                return (value.max(0.0) * scale).round() as u64;
            }
        }
        // A magnitude letter with no leading number ("kg", "likes") falls
        // through to plain digit extraction.
    }

    let digits: String = cleaned.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().unwrap_or(0)
}
