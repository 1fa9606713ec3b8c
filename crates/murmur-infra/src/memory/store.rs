use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use murmur_core::domain::{Comment, Follow, Group, Post, User};

#[derive(Default)]
pub(crate) struct Tables {
    pub users: HashMap<Uuid, User>,
    pub groups: HashMap<Uuid, Group>,
    pub posts: HashMap<Uuid, Post>,
    pub comments: HashMap<Uuid, Comment>,
    pub follows: Vec<Follow>,
}

/// Single-process relational store backing the in-memory repositories.
///
/// All tables sit behind one lock so that multi-row operations
/// (cascading deletes, uniqueness checks) are atomic, matching the
/// single-writer-per-record semantics the relational schema provides.
/// Data is lost on process restart.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub(crate) tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
