//! Error types for rowsql

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error types for statement building and execution
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Statement execution error
    #[error("Execution error: {0}")]
    Execution(#[from] tokio_postgres::Error),

    /// Unique constraint violation
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Check constraint violation: {0}")]
    CheckViolation(String),

    /// A value whose kind cannot be mapped to a column type.
    ///
    /// Raised at the ingestion boundary, before any statement text is built.
    #[error("Unsupported value kind '{kind}': {rendered}")]
    UnsupportedType { kind: String, rendered: String },

    /// Row/header arity violation or other batch-shape problem
    #[error("Row shape error: {0}")]
    Shape(String),

    /// Invalid table or column identifier
    #[error("Invalid identifier: {0}")]
    Identifier(String),

    /// Result decode error for a specific column
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Pool error
    #[cfg(feature = "pool")]
    #[error("Pool error: {0}")]
    Pool(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl StoreError {
    /// Create an unsupported-type error identifying the offending value.
    pub fn unsupported(kind: impl Into<String>, rendered: impl Into<String>) -> Self {
        Self::UnsupportedType {
            kind: kind.into(),
            rendered: rendered.into(),
        }
    }

    /// Create a row-shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }

    /// Create an identifier error.
    pub fn identifier(message: impl Into<String>) -> Self {
        Self::Identifier(message.into())
    }

    /// Create a decode error for a specific column.
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Check if this is a unique violation error
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }

    /// Check if this is an unsupported-type error
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }

    /// Parse a tokio_postgres error into a more specific StoreError
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            let constraint = db_err.constraint().unwrap_or("unknown");
            let message = db_err.message();

            match db_err.code().code() {
                "23505" => return Self::UniqueViolation(format!("{}: {}", constraint, message)),
                "23503" => {
                    return Self::ForeignKeyViolation(format!("{}: {}", constraint, message));
                }
                "23514" => return Self::CheckViolation(format!("{}: {}", constraint, message)),
                _ => {}
            }
        }
        Self::Execution(err)
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
