//! Persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the durable key-value contract consumed by services.
//! - Isolate SQLite details from counter and statistics logic.

pub mod kv_repo;
