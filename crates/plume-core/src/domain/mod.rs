//! Domain entities - the core business objects.

mod post;

mod snapshot;

pub use post::{Post, PostStatus};
pub use snapshot::AppSnapshot;
