//! Per-address scan driver.
//!
//! Failures are isolated at address granularity: a failed snapshot fetch
//! produces a degraded ERROR row, and only addresses on no known platform
//! produce nothing (they are skipped with a warning). A single bad address
//! never aborts the run.

use creatorscan_core::{OperatorContext, OutputRecord, Platform};
use creatorscan_scraper::{assemble_failure, assemble_success, extract, SnapshotSource};

/// Processes every address and returns the accumulated rows.
///
/// One row per supported address, in input order; addresses on unsupported
/// platforms are skipped without a row.
pub async fn scan_all<S: SnapshotSource>(
    source: &S,
    addresses: &[String],
    context: &OperatorContext,
    max_view_samples: usize,
) -> Vec<OutputRecord> {
    let mut records = Vec::with_capacity(addresses.len());

    for address in addresses {
        let Some(platform) = Platform::from_address(address) else {
            tracing::warn!(address = %address, "unsupported platform; skipping");
            continue;
        };
        tracing::info!(address = %address, platform = %platform, "processing profile");

        let record = match source.fetch(address, platform).await {
            Ok(snapshot) => {
                let metrics = extract(&snapshot, max_view_samples);
                tracing::info!(
                    creator = %metrics.creator_name,
                    followers = metrics.follower_count,
                    avg_views = metrics.average_recent_views,
                    "extracted profile metrics"
                );
                assemble_success(&metrics, address, context)
            }
            Err(err) => {
                tracing::warn!(address = %address, error = %err, "snapshot fetch failed; emitting degraded row");
                assemble_failure(address, platform, &err.to_string(), context)
            }
        };
        records.push(record);
    }

    tracing::info!(rows = records.len(), "scan complete");
    records
}
