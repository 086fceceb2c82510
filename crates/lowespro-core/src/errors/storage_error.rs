//! Storage-layer errors for SQLite operations.

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    /// The requested row does not exist. `resource` is the display name
    /// ("Vendor", "Category", ...) so the message matches the API contract.
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// A unique-name constraint was violated (trade names).
    #[error("{resource} with name '{name}' already exists")]
    DuplicateName { resource: &'static str, name: String },

    /// A category still has subcategories referencing it.
    #[error("Category has {children} subcategories and cannot be deleted")]
    CategoryHasChildren { children: i64 },

    /// A payload field points at a row that does not exist.
    #[error("{field} does not reference an existing {resource}")]
    InvalidReference { field: &'static str, resource: &'static str },

    /// A hierarchy field points the row at itself.
    #[error("{field} must not reference the record itself")]
    SelfReference { field: &'static str },

    #[error("Connection pool error: {message}")]
    Pool { message: String },
}

impl StorageError {
    /// Wrap any displayable error as a generic SQLite error.
    pub fn sqlite(e: impl std::fmt::Display) -> Self {
        Self::Sqlite { message: e.to_string() }
    }
}

/// A type alias for a `Result` that returns a `StorageError` on failure.
pub type StorageResult<T> = Result<T, StorageError>;
