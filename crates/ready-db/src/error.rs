//! Database error types for ready-db.

use ready_core::errors::BackendError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A row addressed by id does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A withdrawal asked for more than the item holds.
    #[error("สินค้าไม่พอ: insufficient stock (available {available}, requested {requested})")]
    InsufficientStock { available: i64, requested: i64 },

    /// The named procedure is not deployed on this database.
    #[error("Could not find the function public.{0}")]
    ProcedureUnavailable(String),

    /// Invalid state encountered (e.g., bad arguments or data).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DatabaseError> for BackendError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::NotFound { entity, id } => Self::NotFound { entity, id },
            DatabaseError::InsufficientStock {
                available,
                requested,
            } => Self::InsufficientStock {
                available,
                requested,
            },
            DatabaseError::ProcedureUnavailable(name) => Self::Procedure {
                message: format!("Could not find the function public.{name}"),
                name,
                code: Some("PGRST202".into()),
            },
            DatabaseError::Query(message) => Self::Decode(message),
            DatabaseError::InvalidState(message) => Self::Rejected {
                status: 400,
                message,
            },
            other => Self::Storage(other.to_string()),
        }
    }
}
