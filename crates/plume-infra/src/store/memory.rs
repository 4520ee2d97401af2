//! In-memory post store - used as fallback when the data directory is
//! unavailable. Note: data is lost on process exit.

use async_trait::async_trait;
use tokio::sync::RwLock;

use plume_core::domain::Post;
use plume_core::ports::PostStore;

pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn load(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    async fn save(&self, posts: &[Post]) -> bool {
        *self.posts.write().await = posts.to_vec();
        true
    }

    async fn clear(&self) -> bool {
        self.posts.write().await.clear();
        true
    }
}
