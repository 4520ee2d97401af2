//! Commands accepted by the post state engine, and the pure transition
//! function that applies them.
//!
//! `apply` performs no I/O; persistence is the engine's concern. This
//! keeps every state change a plain value-to-value mapping that can be
//! tested without a store or a clock.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{AppSnapshot, Post};

/// A state transition request.
#[derive(Debug, Clone)]
pub enum Command {
    /// Insert a post into the collection. Only the engine constructs
    /// the `Post`; the presentation layer never builds one directly.
    AddPost(Post),
    /// Remove the post with this ID. Silent no-op if absent.
    DeletePost(Uuid),
    /// Empty the collection.
    ClearAll,
    /// Flip every due scheduled post to published as of `now`.
    PublishDue(DateTime<Utc>),
    /// Replace the collection with a loaded one.
    LoadAll(Vec<Post>),
    /// Refresh the current-time signal.
    UpdateTime(DateTime<Utc>),
}

/// Apply one command to a snapshot and return the next snapshot.
pub fn apply(mut state: AppSnapshot, command: Command) -> AppSnapshot {
    match command {
        Command::AddPost(post) => {
            state.posts.push(post);
            sort_by_schedule(&mut state.posts);
        }
        Command::DeletePost(id) => {
            state.posts.retain(|post| post.id != id);
        }
        Command::ClearAll => {
            state.posts.clear();
        }
        Command::PublishDue(now) => {
            // Publication never re-sorts; canonical order is fixed by
            // insertion and load.
            for post in &mut state.posts {
                if post.is_due(now) {
                    post.publish(now);
                }
            }
        }
        Command::LoadAll(mut posts) => {
            sort_by_schedule(&mut posts);
            state.posts = posts;
        }
        Command::UpdateTime(now) => {
            state.current_time = now;
        }
    }
    state
}

/// Ascending by `scheduled_time`; `sort_by_key` is stable, so ties
/// keep insertion order.
fn sort_by_schedule(posts: &mut [Post]) {
    posts.sort_by_key(|post| post.scheduled_time);
}
