//! Trait definitions for query builders.

use crate::client::{Executor, params_ref};
use crate::error::SqlResult;
use crate::value::Value;
use crate::writer::SqlWriter;
use tokio_postgres::types::ToSql;

/// Base trait for all statements.
///
/// Implementations write themselves into a fresh [`SqlWriter`]; rendering
/// never mutates the statement, so the same value can be built any number of
/// times.
pub trait SqlQb {
    /// Write the statement into `w`.
    ///
    /// Fails when the statement is malformed (e.g. INSERT without columns) or
    /// cannot be expressed in the writer's dialect.
    fn write_query(&self, w: &mut SqlWriter) -> SqlResult<()>;
}

impl<T: SqlQb + ?Sized> SqlQb for &T {
    fn write_query(&self, w: &mut SqlWriter) -> SqlResult<()> {
        (**self).write_query(w)
    }
}

/// The result of building a query.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub values: Vec<Value>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(sql: String, values: Vec<Value>) -> Self {
        Self { sql, values }
    }

    /// Get values as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        params_ref(&self.values)
    }

    /// Split into SQL text and values.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.values)
    }

    /// Execute and return affected row count.
    pub async fn execute<E: Executor>(&self, conn: &E) -> SqlResult<u64> {
        tracing::debug!(
            target: "sqlexpr.exec",
            param_count = self.values.len(),
            sql = %self.sql,
            "execute"
        );
        conn.execute(&self.sql, &self.values)
            .await
            .inspect_err(|e| tracing::warn!(target: "sqlexpr.exec", error = %e, "execute failed"))
    }

    /// Execute and return all rows.
    pub async fn fetch_all<E: Executor>(&self, conn: &E) -> SqlResult<Vec<E::Row>> {
        tracing::debug!(
            target: "sqlexpr.exec",
            param_count = self.values.len(),
            sql = %self.sql,
            "query"
        );
        conn.query(&self.sql, &self.values)
            .await
            .inspect_err(|e| tracing::warn!(target: "sqlexpr.exec", error = %e, "query failed"))
    }
}
