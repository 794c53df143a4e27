//! Statement executor interface.
//!
//! Rendering never touches a database. Anything that can run a SQL string with
//! positional values implements [`Executor`]; implementations are provided for
//! `tokio_postgres::Client` and `tokio_postgres::Transaction`, so a rendered
//! statement can run inside or outside a transaction unchanged.

use crate::error::{SqlError, SqlResult};
use crate::value::Value;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

/// Runs rendered SQL with its bound values.
pub trait Executor: Send + Sync {
    /// Row type produced by [`Executor::query`].
    type Row: Send;

    /// Execute a statement and return the number of affected rows.
    fn execute(
        &self,
        sql: &str,
        values: &[Value],
    ) -> impl std::future::Future<Output = SqlResult<u64>> + Send;

    /// Execute a statement and return all rows.
    fn query(
        &self,
        sql: &str,
        values: &[Value],
    ) -> impl std::future::Future<Output = SqlResult<Vec<Self::Row>>> + Send;
}

/// Borrow values as tokio-postgres parameters.
pub fn params_ref(values: &[Value]) -> Vec<&(dyn ToSql + Sync)> {
    values.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
}

impl Executor for tokio_postgres::Client {
    type Row = Row;

    async fn execute(&self, sql: &str, values: &[Value]) -> SqlResult<u64> {
        let params = params_ref(values);
        tokio_postgres::Client::execute(self, sql, &params)
            .await
            .map_err(SqlError::from)
    }

    async fn query(&self, sql: &str, values: &[Value]) -> SqlResult<Vec<Row>> {
        let params = params_ref(values);
        tokio_postgres::Client::query(self, sql, &params)
            .await
            .map_err(SqlError::from)
    }
}

impl Executor for tokio_postgres::Transaction<'_> {
    type Row = Row;

    async fn execute(&self, sql: &str, values: &[Value]) -> SqlResult<u64> {
        let params = params_ref(values);
        tokio_postgres::Transaction::execute(self, sql, &params)
            .await
            .map_err(SqlError::from)
    }

    async fn query(&self, sql: &str, values: &[Value]) -> SqlResult<Vec<Row>> {
        let params = params_ref(values);
        tokio_postgres::Transaction::query(self, sql, &params)
            .await
            .map_err(SqlError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_keep_value_order() {
        let values = vec![Value::from(1), Value::from("a"), Value::Null];
        let params = params_ref(&values);
        assert_eq!(params.len(), 3);
    }
}
