//! Assembly of the final output rows.
//!
//! Exactly one row exists per supported input address: successful
//! extraction merges metrics with operator context, and a failed snapshot
//! acquisition still produces a degraded ERROR row so downstream
//! reconciliation never loses an address.

use chrono::Local;
use creatorscan_core::{CreatorMetrics, OperatorContext, OutputRecord, Platform};

/// Builds the output row for a successfully extracted profile.
#[must_use]
pub fn assemble_success(
    metrics: &CreatorMetrics,
    address: &str,
    context: &OperatorContext,
) -> OutputRecord {
    build_success(metrics, address, context, &today_stamp())
}

/// Builds the degraded row for an address whose snapshot could not be
/// acquired. The failure message lands verbatim in `TCE Comment`.
#[must_use]
pub fn assemble_failure(
    address: &str,
    platform: Platform,
    error_message: &str,
    context: &OperatorContext,
) -> OutputRecord {
    build_failure(address, platform, error_message, context, &today_stamp())
}

fn build_success(
    metrics: &CreatorMetrics,
    address: &str,
    context: &OperatorContext,
    date: &str,
) -> OutputRecord {
    OutputRecord {
        internal_comment: context.internal_comment.clone(),
        date: date.to_owned(),
        executive: context.executive.clone(),
        team: context.team.clone(),
        creator_name: metrics.creator_name.clone(),
        category: context.category.clone(),
        platform: metrics.platform.label().to_owned(),
        platform_link: address.to_owned(),
        followers: metrics.follower_count,
        region: metrics.region.clone(),
        cost: String::new(),
        avg_views: metrics.average_recent_views,
        engagement_rate: metrics.engagement_rate_percent.clone(),
        client_comment: String::new(),
        tce_comment: String::new(),
    }
}

fn build_failure(
    address: &str,
    platform: Platform,
    error_message: &str,
    context: &OperatorContext,
    date: &str,
) -> OutputRecord {
    OutputRecord {
        internal_comment: context.internal_comment.clone(),
        date: date.to_owned(),
        executive: context.executive.clone(),
        team: context.team.clone(),
        creator_name: "ERROR".to_owned(),
        category: context.category.clone(),
        platform: platform.label().to_owned(),
        platform_link: address.to_owned(),
        followers: 0,
        region: String::new(),
        cost: String::new(),
        avg_views: 0,
        engagement_rate: "0.00".to_owned(),
        client_comment: String::new(),
        tce_comment: error_message.to_owned(),
    }
}

/// Today's date as `DD/MM/YYYY`, the format the downstream sheet expects.
fn today_stamp() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> CreatorMetrics {
        CreatorMetrics {
            creator_name: "x_official".to_owned(),
            follower_count: 1_200_000,
            average_recent_views: 20_000,
            engagement_rate_percent: "1.67".to_owned(),
            platform: Platform::Instagram,
            region: String::new(),
        }
    }

    fn context() -> OperatorContext {
        OperatorContext {
            executive: "dana".to_owned(),
            team: "emea".to_owned(),
            category: "beauty".to_owned(),
            internal_comment: "Q3 push".to_owned(),
        }
    }

    #[test]
    fn success_row_merges_metrics_and_context() {
        let row = build_success(
            &metrics(),
            "https://instagram.com/x",
            &context(),
            "29/08/2026",
        );
        assert_eq!(row.creator_name, "x_official");
        assert_eq!(row.platform, "Instagram");
        assert_eq!(row.platform_link, "https://instagram.com/x");
        assert_eq!(row.followers, 1_200_000);
        assert_eq!(row.avg_views, 20_000);
        assert_eq!(row.engagement_rate, "1.67");
        assert_eq!(row.executive, "dana");
        assert_eq!(row.team, "emea");
        assert_eq!(row.category, "beauty");
        assert_eq!(row.internal_comment, "Q3 push");
        assert_eq!(row.date, "29/08/2026");
    }

    #[test]
    fn success_row_reserved_fields_stay_empty() {
        let row = build_success(&metrics(), "https://instagram.com/x", &context(), "29/08/2026");
        assert_eq!(row.cost, "");
        assert_eq!(row.client_comment, "");
        assert_eq!(row.tce_comment, "");
        assert_eq!(row.region, "");
    }

    #[test]
    fn success_row_with_empty_context() {
        let row = build_success(
            &metrics(),
            "https://instagram.com/x",
            &OperatorContext::default(),
            "29/08/2026",
        );
        assert_eq!(row.executive, "");
        assert_eq!(row.team, "");
        assert_eq!(row.category, "");
        assert_eq!(row.internal_comment, "");
    }

    #[test]
    fn failure_row_carries_the_message_verbatim() {
        let row = build_failure(
            "https://tiktok.com/@x",
            Platform::TikTok,
            "Timeout 90000ms",
            &context(),
            "29/08/2026",
        );
        assert_eq!(row.creator_name, "ERROR");
        assert_eq!(row.platform, "TikTok");
        assert_eq!(row.platform_link, "https://tiktok.com/@x");
        assert_eq!(row.followers, 0);
        assert_eq!(row.avg_views, 0);
        assert_eq!(row.engagement_rate, "0.00");
        assert_eq!(row.tce_comment, "Timeout 90000ms");
    }

    #[test]
    fn failure_row_keeps_operator_context() {
        let row = build_failure(
            "https://tiktok.com/@x",
            Platform::TikTok,
            "Timeout 90000ms",
            &context(),
            "29/08/2026",
        );
        assert_eq!(row.executive, "dana");
        assert_eq!(row.internal_comment, "Q3 push");
    }

    #[test]
    fn date_stamp_shape() {
        let stamp = today_stamp();
        assert_eq!(stamp.len(), 10);
        let parts: Vec<&str> = stamp.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 4);
    }
}
