use chrono::{DateTime, Utc};

use super::Post;

/// Everything a consumer renders from: the canonical post collection
/// (ascending `scheduled_time`, stable on ties) plus the last observed
/// wall-clock time. The time signal is refreshed by the ticker and is
/// never persisted.
#[derive(Debug, Clone)]
pub struct AppSnapshot {
    pub posts: Vec<Post>,
    pub current_time: DateTime<Utc>,
}

impl AppSnapshot {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            current_time: Utc::now(),
        }
    }
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
