//! The post state engine - sole owner of the canonical collection.
//!
//! Every mutation goes through [`crate::command::apply`] and, once the
//! initial load has completed, writes the full collection through the
//! storage port. The engine is an explicitly constructed instance
//! owned by the session; nothing here is process-global.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::command::{self, Command};
use crate::domain::{AppSnapshot, Post, PostStatus};
use crate::ports::PostStore;

pub struct PostEngine {
    snapshot: AppSnapshot,
    store: Arc<dyn PostStore>,
    loaded: bool,
}

impl PostEngine {
    /// Create an engine with an empty collection. Call
    /// [`load_from_store`](Self::load_from_store) before mutating;
    /// until it completes the engine reports loading and skips all
    /// persistence writes.
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            snapshot: AppSnapshot::new(),
            store,
            loaded: false,
        }
    }

    /// Replace the in-memory collection with the persisted one,
    /// sorted ascending by scheduled time. The only operation that
    /// introduces posts not created via [`add_post`](Self::add_post).
    pub async fn load_from_store(&mut self) {
        let posts = self.store.load().await;
        tracing::info!(count = posts.len(), "Loaded posts from store");

        self.snapshot = command::apply(self.snapshot.clone(), Command::LoadAll(posts));
        self.loaded = true;
    }

    /// Whether the initial load is still outstanding.
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// Create and insert a new scheduled post. Content and time are
    /// assumed validated by the caller; the engine does not
    /// re-validate.
    pub async fn add_post(&mut self, content: String, scheduled_time: DateTime<Utc>) {
        let post = Post::new(content, scheduled_time);
        tracing::debug!(post_id = %post.id, scheduled_time = %post.scheduled_time, "Post scheduled");

        self.apply(Command::AddPost(post));
        self.persist().await;
    }

    /// Remove a post by ID. A missing ID is a silent no-op.
    pub async fn delete_post(&mut self, id: Uuid) {
        self.apply(Command::DeletePost(id));
        self.persist().await;
    }

    /// Empty the collection and purge persisted storage.
    pub async fn clear_all(&mut self) {
        self.apply(Command::ClearAll);

        if self.loaded {
            if !self.store.clear().await {
                tracing::warn!("Failed to purge persisted posts");
            }
        } else {
            tracing::debug!("Skipping storage purge, initial load incomplete");
        }
    }

    /// Flip every due scheduled post to published as of `now`.
    /// Idempotent; leaves collection order untouched; persists only
    /// when something changed.
    pub async fn publish_due_posts(&mut self, now: DateTime<Utc>) {
        let due = self
            .snapshot
            .posts
            .iter()
            .filter(|post| post.is_due(now))
            .count();
        if due == 0 {
            return;
        }

        tracing::info!(count = due, "Publishing due posts");
        self.apply(Command::PublishDue(now));
        self.persist().await;
    }

    /// Refresh the current-time signal. Never persists.
    pub fn update_time(&mut self, now: DateTime<Utc>) {
        self.apply(Command::UpdateTime(now));
    }

    /// One driver tick: refresh the clock, then sweep due posts.
    pub async fn tick(&mut self, now: DateTime<Utc>) {
        self.update_time(now);
        self.publish_due_posts(now).await;
    }

    /// Posts still waiting for their scheduled time, in canonical
    /// order. Recomputed from the collection on every call.
    pub fn scheduled_posts(&self) -> Vec<Post> {
        self.posts_with_status(PostStatus::Scheduled)
    }

    /// Posts already published, in canonical order.
    pub fn published_posts(&self) -> Vec<Post> {
        self.posts_with_status(PostStatus::Published)
    }

    /// The canonical collection, ascending by scheduled time.
    pub fn posts(&self) -> &[Post] {
        &self.snapshot.posts
    }

    /// Last observed wall-clock time.
    pub fn current_time(&self) -> DateTime<Utc> {
        self.snapshot.current_time
    }

    /// Read-only view of the full application snapshot.
    pub fn snapshot(&self) -> &AppSnapshot {
        &self.snapshot
    }

    fn posts_with_status(&self, status: PostStatus) -> Vec<Post> {
        self.snapshot
            .posts
            .iter()
            .filter(|post| post.status == status)
            .cloned()
            .collect()
    }

    fn apply(&mut self, command: Command) {
        self.snapshot = command::apply(self.snapshot.clone(), command);
    }

    /// Write-through, gated on the initial load: mutations that fire
    /// before `load_from_store` resolves must not clobber persisted
    /// history with a near-empty collection.
    async fn persist(&self) {
        if !self.loaded {
            tracing::debug!("Skipping persistence write, initial load incomplete");
            return;
        }

        if !self.store.save(&self.snapshot.posts).await {
            tracing::warn!("Failed to persist posts");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Duration;
    use std::sync::Mutex;

    /// Store double that records every interaction.
    #[derive(Default)]
    struct RecordingStore {
        posts: Mutex<Vec<Post>>,
        saves: Mutex<u32>,
        cleared: Mutex<bool>,
    }

    impl RecordingStore {
        fn with_posts(posts: Vec<Post>) -> Self {
            Self {
                posts: Mutex::new(posts),
                ..Self::default()
            }
        }

        fn save_count(&self) -> u32 {
            *self.saves.lock().unwrap()
        }

        fn stored(&self) -> Vec<Post> {
            self.posts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostStore for RecordingStore {
        async fn load(&self) -> Vec<Post> {
            self.posts.lock().unwrap().clone()
        }

        async fn save(&self, posts: &[Post]) -> bool {
            *self.posts.lock().unwrap() = posts.to_vec();
            *self.saves.lock().unwrap() += 1;
            true
        }

        async fn clear(&self) -> bool {
            self.posts.lock().unwrap().clear();
            *self.cleared.lock().unwrap() = true;
            true
        }
    }

    async fn loaded_engine() -> (PostEngine, Arc<RecordingStore>) {
        let store = Arc::new(RecordingStore::default());
        let mut engine = PostEngine::new(store.clone());
        engine.load_from_store().await;
        (engine, store)
    }

    #[tokio::test]
    async fn test_add_hello_then_sweep_publishes_it() {
        let (mut engine, _store) = loaded_engine().await;
        let now = Utc::now();

        engine.add_post("Hello".into(), now + Duration::hours(1)).await;
        assert_eq!(engine.posts().len(), 1);
        assert_eq!(engine.posts()[0].status, PostStatus::Scheduled);

        let sweep_at = now + Duration::hours(2);
        engine.publish_due_posts(sweep_at).await;

        assert_eq!(engine.posts().len(), 1);
        assert_eq!(engine.posts()[0].status, PostStatus::Published);
        assert_eq!(engine.posts()[0].published_time, Some(sweep_at));
    }

    #[tokio::test]
    async fn test_later_post_added_first_sorts_after_earlier_one() {
        let (mut engine, _store) = loaded_engine().await;
        let now = Utc::now();

        engine.add_post("later".into(), now + Duration::hours(2)).await;
        engine.add_post("earlier".into(), now + Duration::hours(1)).await;

        assert_eq!(engine.posts()[0].content, "earlier");
        assert_eq!(engine.posts()[1].content, "later");
    }

    #[tokio::test]
    async fn test_repeated_sweep_does_not_republish() {
        let (mut engine, store) = loaded_engine().await;
        let now = Utc::now();

        engine.add_post("due".into(), now + Duration::minutes(1)).await;
        let sweep_at = now + Duration::minutes(5);

        engine.publish_due_posts(sweep_at).await;
        let published_at = engine.posts()[0].published_time;
        let saves_after_first = store.save_count();

        engine.publish_due_posts(sweep_at).await;
        assert_eq!(engine.posts()[0].published_time, published_at);
        // Nothing changed, so nothing was written either.
        assert_eq!(store.save_count(), saves_after_first);
    }

    #[tokio::test]
    async fn test_mutations_before_initial_load_do_not_write_through() {
        let historical = vec![Post::new("history".into(), Utc::now() + Duration::days(1))];
        let store = Arc::new(RecordingStore::with_posts(historical.clone()));
        let mut engine = PostEngine::new(store.clone());

        assert!(engine.is_loading());
        engine.add_post("early".into(), Utc::now() + Duration::hours(1)).await;

        assert_eq!(store.save_count(), 0);
        assert_eq!(store.stored(), historical);

        engine.load_from_store().await;
        assert!(!engine.is_loading());
        engine.add_post("late".into(), Utc::now() + Duration::hours(2)).await;
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn test_load_from_store_sorts_and_replaces() {
        let now = Utc::now();
        let unsorted = vec![
            Post::new("b".into(), now + Duration::hours(2)),
            Post::new("a".into(), now + Duration::hours(1)),
        ];
        let store = Arc::new(RecordingStore::with_posts(unsorted));
        let mut engine = PostEngine::new(store);

        engine.load_from_store().await;
        let contents: Vec<&str> = engine.posts().iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_delete_post_removes_and_persists() {
        let (mut engine, store) = loaded_engine().await;
        let now = Utc::now();

        engine.add_post("keep".into(), now + Duration::hours(1)).await;
        engine.add_post("drop".into(), now + Duration::hours(2)).await;
        let target = engine.posts()[1].id;

        engine.delete_post(target).await;
        assert_eq!(engine.posts().len(), 1);
        assert_eq!(store.stored().len(), 1);

        // Deleting an unknown ID changes nothing.
        engine.delete_post(Uuid::new_v4()).await;
        assert_eq!(engine.posts().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_all_empties_collection_and_purges_storage() {
        let (mut engine, store) = loaded_engine().await;

        engine.add_post("gone".into(), Utc::now() + Duration::hours(1)).await;
        engine.clear_all().await;

        assert!(engine.posts().is_empty());
        assert!(store.stored().is_empty());
        assert!(*store.cleared.lock().unwrap());
    }

    #[tokio::test]
    async fn test_derived_views_split_by_status() {
        let (mut engine, _store) = loaded_engine().await;
        let now = Utc::now();

        engine.add_post("past".into(), now - Duration::hours(1)).await;
        engine.add_post("future".into(), now + Duration::hours(1)).await;
        engine.publish_due_posts(now).await;

        let scheduled = engine.scheduled_posts();
        let published = engine.published_posts();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].content, "future");
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].content, "past");
        // Views are derived; the canonical collection still holds both.
        assert_eq!(engine.posts().len(), 2);
    }

    #[tokio::test]
    async fn test_tick_refreshes_clock_and_sweeps() {
        let (mut engine, _store) = loaded_engine().await;
        let now = Utc::now();

        engine.add_post("due soon".into(), now + Duration::seconds(30)).await;

        let later = now + Duration::minutes(1);
        engine.tick(later).await;

        assert_eq!(engine.current_time(), later);
        assert_eq!(engine.posts()[0].status, PostStatus::Published);
    }

    #[tokio::test]
    async fn test_status_published_iff_published_time_set() {
        let (mut engine, _store) = loaded_engine().await;
        let now = Utc::now();

        for offset in [-2i64, -1, 1, 2] {
            engine
                .add_post(format!("post {offset}"), now + Duration::hours(offset))
                .await;
        }
        engine.publish_due_posts(now).await;

        for post in engine.posts() {
            assert_eq!(
                post.status == PostStatus::Published,
                post.published_time.is_some()
            );
        }
    }
}
