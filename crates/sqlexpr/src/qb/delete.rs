//! DELETE statement.

use crate::error::SqlResult;
use crate::expr::Predicate;
use crate::qb::traits::SqlQb;
use crate::qb::{and_predicate, write_where};
use crate::writer::SqlWriter;

/// DELETE query builder.
///
/// Without a filter the statement renders `WHERE 1 = 1` and deletes every row.
#[derive(Clone, Debug)]
pub struct DeleteQb {
    table: String,
    predicate: Option<Predicate>,
}

impl DeleteQb {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            predicate: None,
        }
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

impl SqlQb for DeleteQb {
    fn write_query(&self, w: &mut SqlWriter) -> SqlResult<()> {
        w.write_raw("DELETE FROM ");
        w.write_ident(&self.table);
        write_where(w, self.predicate.as_ref());
        Ok(())
    }
}
