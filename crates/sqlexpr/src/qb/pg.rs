//! Postgres-only statements.

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::expr::{Column, Operand};
use crate::qb::insert::InsertQb;
use crate::qb::traits::SqlQb;
use crate::writer::SqlWriter;

/// Create a Postgres INSERT statement.
pub fn insert(table: impl Into<String>) -> PgInsertQb {
    PgInsertQb::from(InsertQb::new(table))
}

/// INSERT with an optional `RETURNING` clause.
///
/// Rendering through any dialect other than [`Dialect::Postgres`] fails with
/// [`SqlError::DialectMismatch`].
#[derive(Clone, Debug)]
pub struct PgInsertQb {
    insert: InsertQb,
    returning: Vec<Column>,
}

impl From<InsertQb> for PgInsertQb {
    fn from(insert: InsertQb) -> Self {
        Self {
            insert,
            returning: Vec::new(),
        }
    }
}

impl PgInsertQb {
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Column>,
    {
        self.insert = self.insert.columns(columns);
        self
    }

    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        self.insert = self.insert.values(values);
        self
    }

    pub fn set(mut self, column: impl Into<Column>, value: impl Into<Operand>) -> Self {
        self.insert = self.insert.set(column, value);
        self
    }

    /// Replace the RETURNING column list.
    pub fn returning<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Column>,
    {
        self.returning = columns.into_iter().map(Into::into).collect();
        self
    }
}

impl SqlQb for PgInsertQb {
    fn write_query(&self, w: &mut SqlWriter) -> SqlResult<()> {
        if w.dialect() != Dialect::Postgres {
            return Err(SqlError::DialectMismatch {
                expected: Dialect::Postgres,
                actual: w.dialect(),
            });
        }

        self.insert.write_query(w)?;
        if !self.returning.is_empty() {
            w.write_raw(" RETURNING ");
            w.write_columns(&self.returning);
        }
        Ok(())
    }
}
