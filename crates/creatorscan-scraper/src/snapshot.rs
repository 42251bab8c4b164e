//! The snapshot boundary between navigation and extraction.
//!
//! Extraction only ever sees a [`PageSnapshot`]; how the page got rendered
//! is the [`SnapshotSource`]'s business. The default source is a plain HTTP
//! fetch — swap in a headless-browser-backed implementation behind the same
//! trait when profile pages require script execution.

use std::time::Duration;

use creatorscan_core::Platform;
use reqwest::Client;

use crate::error::SnapshotError;

const BROWSER_FALLBACK_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// A fully rendered profile page, tagged with its address and platform.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub address: String,
    pub platform: Platform,
    pub html: String,
}

/// Supplier of rendered profile snapshots.
///
/// A failed fetch is reported per address; it never aborts a whole run.
pub trait SnapshotSource {
    fn fetch(
        &self,
        address: &str,
        platform: Platform,
    ) -> impl std::future::Future<Output = Result<PageSnapshot, SnapshotError>> + Send;
}

/// [`SnapshotSource`] backed by a plain HTTP GET.
///
/// Tries the configured user-agent first and retries once with a browser
/// user-agent — some profile pages serve stripped-down markup (or nothing)
/// to non-browser fingerprints.
pub struct HttpSnapshotSource {
    client: Client,
    user_agent: String,
}

impl HttpSnapshotSource {
    /// Creates a source with the given request timeout and user-agent.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SnapshotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            user_agent: user_agent.to_owned(),
        })
    }

    async fn try_fetch(&self, address: &str, user_agent: &str) -> Result<String, SnapshotError> {
        let response = self
            .client
            .get(address)
            .header(reqwest::header::USER_AGENT, user_agent)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SnapshotError::HttpStatus {
                status: response.status().as_u16(),
                url: address.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}

impl SnapshotSource for HttpSnapshotSource {
    async fn fetch(
        &self,
        address: &str,
        platform: Platform,
    ) -> Result<PageSnapshot, SnapshotError> {
        let html = match self.try_fetch(address, &self.user_agent).await {
            Ok(html) => html,
            Err(err) if self.user_agent != BROWSER_FALLBACK_UA => {
                tracing::debug!(address, error = %err, "retrying with browser user-agent");
                self.try_fetch(address, BROWSER_FALLBACK_UA).await?
            }
            Err(err) => return Err(err),
        };

        Ok(PageSnapshot {
            address: address.to_owned(),
            platform,
            html,
        })
    }
}
