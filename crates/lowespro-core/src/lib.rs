//! # lowespro-core
//!
//! Foundation crate for the LowesPro vendor management backend.
//! Defines the domain models, insert/patch payload types with validation,
//! the error taxonomy, id/vendor-number helpers, and configuration.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod ids;
pub mod models;
pub mod time;

// Re-export the most commonly used types at the crate root.
pub use config::AppConfig;
pub use errors::{StorageError, StorageResult, ValidationError};
pub use ids::{format_vendor_number, new_id};
pub use time::utc_now;
