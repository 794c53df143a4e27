//! Error types for sqlexpr

use crate::dialect::Dialect;
use thiserror::Error;

/// Result type alias for sqlexpr operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for building and executing statements
#[derive(Debug, Error)]
pub enum SqlError {
    /// A dynamic input could not be turned into a literal value
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// INSERT/UPDATE rendered without any column
    #[error("{statement}: list of columns can not be empty")]
    EmptyColumns { statement: &'static str },

    /// INSERT/UPDATE column and value lists differ in length
    #[error("{statement}: amount of columns ({columns}) and values ({values}) differs")]
    ColumnCountMismatch {
        statement: &'static str,
        columns: usize,
        values: usize,
    },

    /// A dialect-specific statement rendered through another dialect
    #[error("Statement requires the {expected} dialect, builder uses {actual}")]
    DialectMismatch { expected: Dialect, actual: Dialect },

    /// Dialect name not recognized
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    /// Statement execution error
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),
}

impl SqlError {
    /// Create an unsupported type error
    pub fn unsupported_type(message: impl Into<String>) -> Self {
        Self::UnsupportedType(message.into())
    }

    /// Check if this error was raised while building SQL (as opposed to executing it)
    pub fn is_build_error(&self) -> bool {
        !matches!(self, Self::Query(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_counts() {
        let err = SqlError::ColumnCountMismatch {
            statement: "INSERT",
            columns: 2,
            values: 1,
        };
        assert_eq!(
            err.to_string(),
            "INSERT: amount of columns (2) and values (1) differs"
        );
        assert!(err.is_build_error());
    }

    #[test]
    fn dialect_mismatch_message() {
        let err = SqlError::DialectMismatch {
            expected: Dialect::Postgres,
            actual: Dialect::Sqlite,
        };
        assert_eq!(
            err.to_string(),
            "Statement requires the postgres dialect, builder uses sqlite"
        );
    }
}
