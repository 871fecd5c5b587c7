use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rate limit state reported by the provider on the last response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: DateTime<Utc>,
    pub is_limited: bool,
}

impl Default for RateLimitState {
    // Anonymous callers get 60 requests per hour.
    fn default() -> Self {
        Self {
            remaining: 60,
            limit: 60,
            reset_time: Utc::now() + chrono::Duration::hours(1),
            is_limited: false,
        }
    }
}
