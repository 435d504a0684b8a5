//! Core types and trait definitions for the Campus record store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod campus;
pub mod entity;
pub mod error;
pub mod memory;
pub mod repository;
pub mod schema;
pub mod store;

pub use campus::Campus;
pub use entity::{Entity, Meta, Timestamp};
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use repository::Repository;
