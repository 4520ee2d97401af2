//! Session state - the engine and its storage wiring.

use std::sync::Arc;

use tokio::sync::Mutex;

use plume_core::PostEngine;
use plume_core::ports::PostStore;
use plume_infra::{InMemoryPostStore, JsonFileStore};

use crate::config::HostConfig;

/// State owned for the lifetime of the session. The engine instance
/// is constructed here and handed out by reference; no part of the
/// system holds global mutable state.
#[derive(Clone)]
pub struct SessionState {
    pub engine: Arc<Mutex<PostEngine>>,
}

impl SessionState {
    /// Build the session state with the appropriate store
    /// implementation, then run the initial load so the engine leaves
    /// its loading phase before anything else touches it.
    pub async fn new(config: &HostConfig) -> Self {
        let store: Arc<dyn PostStore> = match std::fs::create_dir_all(&config.data_dir) {
            Ok(()) => Arc::new(JsonFileStore::new(&config.data_dir)),
            Err(e) => {
                tracing::warn!(
                    data_dir = %config.data_dir.display(),
                    error = %e,
                    "Data directory unavailable. Falling back to in-memory store; posts will not survive restart."
                );
                Arc::new(InMemoryPostStore::new())
            }
        };

        let mut engine = PostEngine::new(store);
        engine.load_from_store().await;

        tracing::info!("Session state initialized");

        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}
