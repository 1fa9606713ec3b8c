//! Application services - the operations consumed by the presentation
//! layer. Ownership and uniqueness rules are enforced here so they hold
//! structurally, regardless of what sits in front.

mod feed;
mod follows;
mod groups;
mod posts;

pub use feed::{DEFAULT_SNAPSHOT_TTL, FeedService, LANDING_FEED_KEY};
pub use follows::FollowService;
pub use groups::GroupService;
pub use posts::PostService;
