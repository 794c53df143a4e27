//! INSERT statement.

use crate::error::SqlResult;
use crate::expr::{Column, Operand};
use crate::qb::check_assignments;
use crate::qb::pg::PgInsertQb;
use crate::qb::traits::SqlQb;
use crate::writer::SqlWriter;

/// INSERT query builder.
///
/// Columns and values are positional: the n-th value goes into the n-th
/// column. Both lists are checked when the statement is rendered.
#[derive(Clone, Debug)]
pub struct InsertQb {
    table: String,
    columns: Vec<Column>,
    values: Vec<Operand>,
}

impl InsertQb {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Replace the column list.
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Column>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the value list.
    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Append one column and its value.
    pub fn set(mut self, column: impl Into<Column>, value: impl Into<Operand>) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    /// Turn into a Postgres INSERT with a RETURNING clause.
    pub fn returning<I>(self, columns: I) -> PgInsertQb
    where
        I: IntoIterator,
        I::Item: Into<Column>,
    {
        PgInsertQb::from(self).returning(columns)
    }
}

impl SqlQb for InsertQb {
    fn write_query(&self, w: &mut SqlWriter) -> SqlResult<()> {
        check_assignments("INSERT", &self.columns, self.values.len())?;

        w.write_raw("INSERT INTO ");
        w.write_ident(&self.table);
        w.write_raw(" (");
        w.write_columns(&self.columns);
        w.write_raw(") VALUES (");
        w.write_list(&self.values, |w, v| w.write_operand(v));
        w.write_char(')');
        Ok(())
    }
}
