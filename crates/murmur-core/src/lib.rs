//! # Murmur Core
//!
//! The domain layer of the Murmur blog platform.
//! This crate contains pure business logic with zero infrastructure
//! dependencies: the entity model, the feed composer, the pagination
//! helper, and the service layer enforcing ownership and uniqueness rules.

pub mod domain;
pub mod error;
pub mod feed;
pub mod pagination;
pub mod ports;
pub mod service;

pub use error::DomainError;
