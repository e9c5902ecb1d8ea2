use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Storage failure with the original cause kept as a tag, so callers can
/// tell a constraint conflict from an outage.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    /// Foreign-key or unique constraint rejected the write.
    #[error("constraint violation: {0}")]
    Conflict(String),
    /// Connection or pool failure.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage error: {0}")]
    Query(String),
}

impl StorageError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::Conflict(_))
    }
}

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return StorageError::Conflict(msg),
            Some(SqlErr::UniqueConstraintViolation(msg)) => return StorageError::Conflict(msg),
            _ => {}
        }
        match err {
            DbErr::Conn(e) => StorageError::Unavailable(e.to_string()),
            DbErr::ConnectionAcquire(e) => StorageError::Unavailable(e.to_string()),
            other => StorageError::Query(other.to_string()),
        }
    }
}
