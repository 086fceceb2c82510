//! # lowespro-storage
//!
//! SQLite persistence layer for the LowesPro backend.
//! WAL mode, write-serialized + read-pooled, `user_version` schema
//! migrations, per-resource query modules, and the `Store` facade the
//! HTTP layer talks to.

pub mod migrations;
pub mod pool;
pub mod pragmas;
pub mod queries;
pub mod schema;
pub mod store;

pub use pool::ConnectionPool;
pub use store::{DebugInfo, Store};
