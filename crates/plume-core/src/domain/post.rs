use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of a post.
///
/// The only legal transition is `Scheduled -> Published`; it is never
/// reversed and never skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Scheduled,
    Published,
}

/// Post entity - a short text item scheduled for future publication.
///
/// Serialized field names follow the persisted storage layout
/// (`scheduledTime`, `publishedTime`, `createdAt`); an unpublished
/// post carries no `publishedTime` key at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub scheduled_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_time: Option<DateTime<Utc>>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new scheduled post with a generated ID and creation
    /// timestamp. Content is assumed to be validated and trimmed.
    pub fn new(content: String, scheduled_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            scheduled_time,
            published_time: None,
            status: PostStatus::Scheduled,
            created_at: Utc::now(),
        }
    }

    /// Whether this post is scheduled and its time has arrived.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == PostStatus::Scheduled && self.scheduled_time <= now
    }

    /// Mark the post published at `now`. Keeps `status` and
    /// `published_time` coupled; callers check `is_due` first.
    pub(crate) fn publish(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Published;
        self.published_time = Some(now);
    }
}
