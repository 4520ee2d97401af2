use async_trait::async_trait;

use crate::domain::Post;

/// Storage port for the canonical post collection.
///
/// Implementations are best-effort and failure-contained: every
/// underlying storage problem (absence, disabled storage, quota,
/// corruption) is caught inside the adapter, logged, and converted to
/// a safe fallback value. Nothing behind this trait ever returns an
/// error to the engine.
///
/// The store only ever receives or produces the full collection; it
/// never partially updates persisted state.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Load the persisted collection, unsorted (ordering is the
    /// engine's responsibility). Empty when nothing is stored or the
    /// stored data cannot be read.
    async fn load(&self) -> Vec<Post>;

    /// Persist the full collection, replacing whatever was stored.
    /// Returns whether the write succeeded.
    async fn save(&self, posts: &[Post]) -> bool;

    /// Remove everything this system has persisted.
    async fn clear(&self) -> bool;
}
