//! UPDATE statement.

use crate::error::SqlResult;
use crate::expr::{Column, Operand, Predicate};
use crate::qb::traits::SqlQb;
use crate::qb::{and_predicate, check_assignments, write_where};
use crate::writer::SqlWriter;

/// UPDATE query builder.
#[derive(Clone, Debug)]
pub struct UpdateQb {
    table: String,
    columns: Vec<Column>,
    values: Vec<Operand>,
    predicate: Option<Predicate>,
}

impl UpdateQb {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
            predicate: None,
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

    /// Append one `column = value` assignment.
    pub fn set(mut self, column: impl Into<Column>, value: impl Into<Operand>) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    /// Replace the WHERE predicate.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// AND a predicate onto the current filter.
    pub fn and_filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(and_predicate(self.predicate.take(), predicate));
        self
    }
}

impl SqlQb for UpdateQb {
    fn write_query(&self, w: &mut SqlWriter) -> SqlResult<()> {
        check_assignments("UPDATE", &self.columns, self.values.len())?;

        w.write_raw("UPDATE ");
        w.write_ident(&self.table);
        w.write_raw(" SET ");
        for (i, (column, value)) in self.columns.iter().zip(&self.values).enumerate() {
            if i > 0 {
                w.write_raw(", ");
            }
            w.write_ident(column.name());
            w.write_raw(" = ");
            w.write_operand(value);
        }
        write_where(w, self.predicate.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::error::SqlError;
    use crate::expr::col;
    use crate::value::Value;

    fn render(q: &UpdateQb) -> SqlResult<(String, Vec<Value>)> {
        let mut w = SqlWriter::new(Dialect::Postgres);
        q.write_query(&mut w)?;
        Ok(w.finish())
    }

    #[test]
    fn without_filter_updates_everything() {
        let (sql, values) = render(&UpdateQb::new("t").set("a", 1)).unwrap();
        assert_eq!(sql, r#"UPDATE "t" SET "a" = $1 WHERE 1 = 1"#);
        assert_eq!(values, vec![Value::Int(1)]);
    }

    #[test]
    fn assignment_values_come_before_filter_values() {
        let q = UpdateQb::new("t")
            .filter(col("id").eq(9))
            .set("a", "x")
            .set("b", col("a"));
        let (sql, values) = render(&q).unwrap();
        assert_eq!(sql, r#"UPDATE "t" SET "a" = $1, "b" = "a" WHERE "id" = $2"#);
        assert_eq!(values, vec![Value::from("x"), Value::Int(9)]);
    }

    #[test]
    fn empty_and_mismatched_lists_fail() {
        let err = render(&UpdateQb::new("t").filter(col("id").eq(1))).unwrap_err();
        assert!(matches!(err, SqlError::EmptyColumns { statement: "UPDATE" }));

        let err = render(&UpdateQb::new("t").columns(["a"]).values([1, 2])).unwrap_err();
        assert!(matches!(
            err,
            SqlError::ColumnCountMismatch {
                statement: "UPDATE",
                columns: 1,
                values: 2,
            }
        ));
    }
}
