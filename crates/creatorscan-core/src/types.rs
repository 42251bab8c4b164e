//! Domain types shared across the creatorscan crates.

use serde::{Deserialize, Serialize};

/// A supported creator platform, inferred once from a profile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    TikTok,
    Instagram,
    YouTube,
}

impl Platform {
    /// Infers the platform from a profile address by host substring.
    ///
    /// Returns `None` for addresses on none of the supported platforms;
    /// callers decide whether that means skip or error.
    #[must_use]
    pub fn from_address(address: &str) -> Option<Self> {
        if address.contains("tiktok.com") {
            Some(Self::TikTok)
        } else if address.contains("instagram.com") {
            Some(Self::Instagram)
        } else if address.contains("youtube.com") {
            Some(Self::YouTube)
        } else {
            None
        }
    }

    /// Display label used in output rows.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TikTok => "TikTok",
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Metrics extracted from one creator profile snapshot.
///
/// Immutable once built; a pure function of the snapshot. Every field
/// carries a documented default so partial extraction still yields a
/// usable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorMetrics {
    /// Creator display name; `"Unknown"` when no name heuristic matched.
    pub creator_name: String,
    pub follower_count: u64,
    /// Integer-rounded mean of the sampled recent content view counts.
    pub average_recent_views: u64,
    /// Percentage with exactly two fractional digits, `"0.00"` when either
    /// followers or views are missing.
    pub engagement_rate_percent: String,
    pub platform: Platform,
    /// Reserved for future geolocation inference; currently always empty.
    pub region: String,
}

/// Operator-supplied context attached verbatim to every output row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorContext {
    #[serde(default)]
    pub executive: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub internal_comment: String,
}

/// One flat row of the output sheet.
///
/// Field names and order match the downstream sheet columns exactly.
/// `Cost` and `Client Comment` are reserved for manual entry and always
/// empty; `TCE Comment` is empty on success and carries the failure
/// message on a degraded row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Internal Comment")]
    pub internal_comment: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Executive")]
    pub executive: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Creator Name")]
    pub creator_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Platform Link")]
    pub platform_link: String,
    #[serde(rename = "Followers")]
    pub followers: u64,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Cost")]
    pub cost: String,
    #[serde(rename = "Avg Views")]
    pub avg_views: u64,
    #[serde(rename = "ER")]
    pub engagement_rate: String,
    #[serde(rename = "Client Comment")]
    pub client_comment: String,
    #[serde(rename = "TCE Comment")]
    pub tce_comment: String,
}
