//! Reduction of sampled view counts into an average and engagement rate.

/// Hard upper bound on how many view-count samples feed the average,
/// regardless of configuration.
pub const MAX_VIEW_SAMPLES: usize = 12;

/// Computes the average of the sampled recent view counts and the derived
/// engagement rate.
///
/// The average is the integer-rounded mean of at most [`MAX_VIEW_SAMPLES`]
/// samples, 0 when there are none. The engagement rate is
/// `average / followers * 100` with exactly two fractional digits, but only
/// when both the follower count and the average are positive; otherwise the
/// literal `"0.00"`. The guard avoids division by zero and a misleading
/// non-zero rate when no content signal exists.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn aggregate(view_counts: &[u64], followers: u64) -> (u64, String) {
    let sampled = &view_counts[..view_counts.len().min(MAX_VIEW_SAMPLES)];

    let average = if sampled.is_empty() {
        0
    } else {
        let total: u64 = sampled.iter().sum();
        (total as f64 / sampled.len() as f64).round() as u64
    };

    let rate = if followers > 0 && average > 0 {
        format!("{:.2}", average as f64 / followers as f64 * 100.0)
    } else {
        "0.00".to_owned()
    };

    (average, rate)
}
