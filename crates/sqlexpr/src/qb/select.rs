//! SELECT statement.

use crate::error::SqlResult;
use crate::expr::{Column, Predicate};
use crate::order::{IntoOrder, Order};
use crate::qb::traits::SqlQb;
use crate::qb::{and_predicate, write_where};
use crate::writer::SqlWriter;

/// SELECT query builder.
#[derive(Clone, Debug)]
pub struct SelectQb {
    table: String,
    columns: Vec<Column>,
    predicate: Option<Predicate>,
    order_by: Vec<Order>,
    limit: u64,
}

impl SelectQb {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            predicate: None,
            order_by: Vec::new(),
            limit: 0,
        }
    }

    /// Replace the selected columns. An empty list selects `*`.
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Column>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
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

    /// Replace the ORDER BY list. Bare names sort ascending.
    pub fn order_by<I>(mut self, orders: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoOrder,
    {
        self.order_by = orders.into_iter().map(IntoOrder::into_order).collect();
        self
    }

    /// Set LIMIT. Zero means no limit.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = n;
        self
    }
}

impl SqlQb for SelectQb {
    fn write_query(&self, w: &mut SqlWriter) -> SqlResult<()> {
        w.write_raw("SELECT ");
        if self.columns.is_empty() {
            w.write_char('*');
        } else {
            w.write_columns(&self.columns);
        }
        w.write_raw(" FROM ");
        w.write_ident(&self.table);
        write_where(w, self.predicate.as_ref());

        if !self.order_by.is_empty() {
            w.write_raw(" ORDER BY ");
            w.write_list(&self.order_by, |w, o| w.write_order(o));
        }

        if self.limit > 0 {
            w.write_raw(" LIMIT ");
            w.write_raw(&self.limit.to_string());
        }
        Ok(())
    }
}
