//! Error taxonomy for the LowesPro backend.

pub mod storage_error;
pub mod validation_error;

pub use storage_error::{StorageError, StorageResult};
pub use validation_error::{ValidationError, Validator};
