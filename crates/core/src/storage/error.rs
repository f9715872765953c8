use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Every store fault is wrapped into this single taxonomy carrying the call
/// context; callers are not expected to distinguish between throttling,
/// missing tables, or permission faults. Nothing is retried locally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A remote call failed for any transport or store reason.
    #[error("{operation} failed on table {table}: {message}")]
    Call {
        operation: &'static str,
        table: String,
        message: String,
    },
    /// The store returned an item missing or mistyping an expected attribute.
    #[error("malformed record: {0}")]
    InvalidRecord(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
