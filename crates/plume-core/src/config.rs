//! Domain constants shared by the engine, the stores, and the host.

use std::time::Duration;

/// Maximum number of characters in a post.
pub const MAX_POST_LENGTH: usize = 280;

/// Character count at which a composer should start warning the user.
pub const WARNING_THRESHOLD: usize = 250;

/// Head start, in minutes, suggested when pre-filling a schedule
/// picker. A form default only - the validation rule is simply
/// "strictly in the future".
pub const MIN_SCHEDULE_MINUTES: i64 = 1;

/// Storage key (file stem) under which the post collection persists.
pub const POSTS_STORAGE_KEY: &str = "scheduled_posts";

/// How often the ticker refreshes the clock and sweeps due posts.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
