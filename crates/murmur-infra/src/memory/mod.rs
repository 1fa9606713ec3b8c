//! In-memory implementations of the persistence ports - used in tests
//! and when running without Postgres.

mod repos;
mod store;

pub use repos::{
    InMemoryCommentRepository, InMemoryFollowRepository, InMemoryGroupRepository,
    InMemoryPostRepository, InMemoryUserRepository,
};
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
