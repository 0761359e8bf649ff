use thiserror::Error;

use crate::clause::ClauseKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] turso::Error),

    #[error("Type conversion error: expected {expected}, got {actual}")]
    TypeConversion { expected: &'static str, actual: String },

    #[error("Unexpected null value for non-nullable field")]
    UnexpectedNull,

    #[error("Malformed {kind} clause arguments: {reason}")]
    MalformedClauseArgs { kind: ClauseKind, reason: String },

    #[error("Placeholder at argument index {index} has no bound value ({available} bound)")]
    PlaceholderArgumentMismatch { index: usize, available: usize },

    #[error("Clause {0} has not been set")]
    AbsentClause(ClauseKind),

    #[error("Sequence argument at index {index} is not bound to an IN predicate")]
    UnboundSequence { index: usize },

    #[error("Record not found")]
    RecordNotFound,

    #[error("Model is not set")]
    ModelNotSet,

    #[error("Dialect {0} not found")]
    DialectNotFound(String),

    #[error("Query error: {0}")]
    Query(String),

    #[cfg(feature = "with-json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(kind: ClauseKind, reason: impl Into<String>) -> Self {
        Error::MalformedClauseArgs { kind, reason: reason.into() }
    }
}
