//! SeaORM entity models mirroring the relational schema in
//! `apps/migration`.

pub mod comment;
pub mod follow;
pub mod group;
pub mod post;
pub mod user;
