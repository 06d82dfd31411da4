//! # Storage Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error) / JSON Error (serde_json::Error)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CheckoutError (session module) ← Joins with domain errors             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(#[from] sqlx::migrate::MigrateError),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A stored JSON snapshot could not be (de)serialized.
    ///
    /// ## When This Occurs
    /// - Schema drift between app versions
    /// - Hand-edited rows
    #[error("Snapshot (de)serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A stored tag column holds a value no current enum variant matches.
    #[error("Unknown {column} tag in row {id}: {tag}")]
    UnknownTag {
        id: String,
        column: &'static str,
        tag: String,
    },

    /// A stored timestamp is not valid RFC 3339.
    #[error("Invalid stored timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// A domain rule rejected the operation (e.g. an order status
    /// transition the lifecycle does not allow).
    #[error(transparent)]
    Domain(#[from] kade_core::error::OrderError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
