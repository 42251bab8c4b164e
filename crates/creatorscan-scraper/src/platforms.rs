//! Per-platform heuristic chains and the extraction entry point.
//!
//! Each platform contributes configuration data only — the chains below —
//! and shares one generic extraction body. Adding a platform is a matter of
//! writing a new [`PlatformProfile`].

use creatorscan_core::{CreatorMetrics, Platform};
use scraper::Html;

use crate::aggregate::aggregate;
use crate::count::parse_count;
use crate::locate::{locate_counts, locate_first, Heuristic, TextShape};
use crate::snapshot::PageSnapshot;

/// Heuristic-chain configuration for one platform.
///
/// Chains are ordered most-specific-first: platform-native structural
/// markers, then labeled generic elements, then bare text-shape queries.
pub struct PlatformProfile {
    pub platform: Platform,
    pub name_chain: &'static [Heuristic],
    pub follower_chain: &'static [Heuristic],
    pub views_chain: &'static [Heuristic],
    /// Consulted only when the views chain yields nothing at all.
    /// Instagram's collapsed profile grid does not always expose view
    /// counts, so like counts stand in as the content signal there.
    pub views_fallback_chain: &'static [Heuristic],
}

static TIKTOK: PlatformProfile = PlatformProfile {
    platform: Platform::TikTok,
    name_chain: &[
        Heuristic {
            selector: r#"[data-e2e="user-title"]"#,
            labels: &[],
            shape: TextShape::Text,
        },
        Heuristic {
            selector: "h1, h2",
            labels: &[],
            shape: TextShape::Text,
        },
    ],
    follower_chain: &[
        Heuristic {
            selector: r#"[data-e2e="followers-count"]"#,
            labels: &[],
            shape: TextShape::Count,
        },
        Heuristic {
            selector: r#"[title*="Followers"]"#,
            labels: &[],
            shape: TextShape::Count,
        },
        Heuristic {
            selector: "strong, span",
            labels: &["followers"],
            shape: TextShape::Count,
        },
    ],
    views_chain: &[
        Heuristic {
            selector: r#"[data-e2e="video-views"]"#,
            labels: &[],
            shape: TextShape::Count,
        },
        Heuristic {
            selector: "strong, span",
            labels: &["views", "plays"],
            shape: TextShape::Count,
        },
    ],
    views_fallback_chain: &[],
};

static INSTAGRAM: PlatformProfile = PlatformProfile {
    platform: Platform::Instagram,
    name_chain: &[
        Heuristic {
            selector: "header h2, header span",
            labels: &[],
            shape: TextShape::Text,
        },
        Heuristic {
            selector: r#"[class*="username"]"#,
            labels: &[],
            shape: TextShape::Text,
        },
        Heuristic {
            selector: "h1, h2",
            labels: &[],
            shape: TextShape::Text,
        },
    ],
    follower_chain: &[
        Heuristic {
            selector: r#"a[href*="followers"]"#,
            labels: &["followers"],
            shape: TextShape::Count,
        },
        Heuristic {
            selector: "a, span",
            labels: &["followers"],
            shape: TextShape::Count,
        },
        Heuristic {
            selector: "header section span",
            labels: &[],
            shape: TextShape::Count,
        },
    ],
    views_chain: &[
        Heuristic {
            selector: r#"[class*="views"]"#,
            labels: &["views", "plays"],
            shape: TextShape::Count,
        },
        Heuristic {
            selector: "span",
            labels: &["views", "plays"],
            shape: TextShape::Count,
        },
    ],
    views_fallback_chain: &[Heuristic {
        selector: "span",
        labels: &["likes"],
        shape: TextShape::Count,
    }],
};

static YOUTUBE: PlatformProfile = PlatformProfile {
    platform: Platform::YouTube,
    name_chain: &[
        Heuristic {
            selector: "yt-formatted-string.ytd-channel-name",
            labels: &[],
            shape: TextShape::Text,
        },
        Heuristic {
            selector: "#channel-name #text",
            labels: &[],
            shape: TextShape::Text,
        },
        Heuristic {
            selector: "h1",
            labels: &[],
            shape: TextShape::Text,
        },
    ],
    follower_chain: &[
        Heuristic {
            selector: "#subscriber-count",
            labels: &[],
            shape: TextShape::Count,
        },
        // Locale experiments sometimes drop the element id; fall back to
        // the labeled text anywhere in the header.
        Heuristic {
            selector: "yt-formatted-string, span",
            labels: &["subscribers"],
            shape: TextShape::Count,
        },
    ],
    views_chain: &[
        Heuristic {
            selector: "span.inline-metadata-item",
            labels: &["views"],
            shape: TextShape::Count,
        },
        Heuristic {
            selector: "#metadata-line span",
            labels: &["views"],
            shape: TextShape::Count,
        },
    ],
    views_fallback_chain: &[],
};

/// Returns the heuristic profile for a platform.
#[must_use]
pub fn profile_for(platform: Platform) -> &'static PlatformProfile {
    match platform {
        Platform::TikTok => &TIKTOK,
        Platform::Instagram => &INSTAGRAM,
        Platform::YouTube => &YOUTUBE,
    }
}

/// Extracts creator metrics from a rendered profile snapshot.
///
/// Pure with respect to the snapshot: no navigation, no mutation, and the
/// same snapshot always yields the same metrics. Never fails — each field
/// independently degrades to its default when its chain is exhausted.
/// `max_view_samples` bounds how many recent content view counts feed the
/// average.
#[must_use]
pub fn extract(snapshot: &PageSnapshot, max_view_samples: usize) -> CreatorMetrics {
    let profile = profile_for(snapshot.platform);
    let doc = Html::parse_document(&snapshot.html);

    let creator_name =
        locate_first(&doc, profile.name_chain).unwrap_or_else(|| "Unknown".to_owned());

    let follower_count = locate_first(&doc, profile.follower_chain)
        .map(|token| parse_count(&token))
        .unwrap_or(0);

    let mut view_tokens = locate_counts(&doc, profile.views_chain, max_view_samples);
    if view_tokens.is_empty() && !profile.views_fallback_chain.is_empty() {
        tracing::debug!(
            platform = %snapshot.platform,
            "no view-shaped text found; falling back to like counts"
        );
        view_tokens = locate_counts(&doc, profile.views_fallback_chain, max_view_samples);
    }
    let view_counts: Vec<u64> = view_tokens.iter().map(|t| parse_count(t)).collect();

    let (average_recent_views, engagement_rate_percent) =
        aggregate(&view_counts, follower_count);

    CreatorMetrics {
        creator_name,
        follower_count,
        average_recent_views,
        engagement_rate_percent,
        platform: snapshot.platform,
        region: String::new(),
    }
}
