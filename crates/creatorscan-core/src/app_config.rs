/// Application configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Timeout for fetching one profile snapshot, in seconds.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Maximum number of recent content view counts sampled per profile.
    pub max_view_samples: usize,
}
