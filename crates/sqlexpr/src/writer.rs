//! Render engine.
//!
//! [`SqlWriter`] accumulates SQL text and the bound values for a single render
//! pass. It is the only place that knows about identifier quoting and
//! placeholder syntax; statements and expressions just describe what to write.
//!
//! Placeholder numbers are assigned in `write_value` order, starting at 1. There
//! is no string replacement and no renumbering afterwards.

use crate::dialect::Dialect;
use crate::expr::{BoolOp, CmpOp, Column, Expr, Operand, Predicate};
use crate::order::Order;
use crate::value::Value;

/// Accumulates SQL text and positional values for one render.
#[derive(Debug)]
pub struct SqlWriter {
    dialect: Dialect,
    sql: String,
    values: Vec<Value>,
}

impl SqlWriter {
    /// Create an empty writer for the given dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            sql: String::with_capacity(64),
            values: Vec::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Append raw SQL text.
    pub fn write_raw(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a single character.
    pub fn write_char(&mut self, ch: char) {
        self.sql.push(ch);
    }

    /// Append a quoted identifier.
    pub fn write_ident(&mut self, name: &str) {
        self.dialect.write_ident(&mut self.sql, name);
    }

    /// Bind a value and append its placeholder.
    pub fn write_value(&mut self, value: Value) {
        self.values.push(value);
        self.dialect.write_placeholder(&mut self.sql, self.values.len());
    }

    /// Append `items` separated by `", "`.
    pub fn write_list<T>(&mut self, items: &[T], mut write_item: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            write_item(self, item);
        }
    }

    /// Append a comma separated list of quoted column names.
    pub fn write_columns(&mut self, columns: &[Column]) {
        self.write_list(columns, |w, c| w.write_ident(c.name()));
    }

    /// Render any expression node.
    pub fn write_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Column(c) => self.write_ident(c.name()),
            Expr::Literal(v) => self.write_value(v.clone()),
            Expr::Predicate(p) => self.write_predicate(p),
            Expr::Order(o) => self.write_order(o),
        }
    }

    /// Render a column or a bound literal.
    pub fn write_operand(&mut self, operand: &Operand) {
        match operand {
            Operand::Column(c) => self.write_ident(c.name()),
            Operand::Literal(v) => self.write_value(v.clone()),
        }
    }

    /// Render a predicate tree.
    ///
    /// Equality against the null literal becomes `IS [NOT] NULL` and binds no
    /// value. A binary child is parenthesized iff its connective differs from
    /// its parent's.
    pub fn write_predicate(&mut self, predicate: &Predicate) {
        match predicate {
            Predicate::Compare { op, lhs, rhs } => {
                self.write_operand(lhs);
                if rhs.is_null() && matches!(op, CmpOp::Eq | CmpOp::Ne) {
                    self.write_raw(if *op == CmpOp::Eq {
                        " IS NULL"
                    } else {
                        " IS NOT NULL"
                    });
                    return;
                }
                self.write_char(' ');
                self.write_raw(op.as_sql());
                self.write_char(' ');
                self.write_operand(rhs);
            }
            Predicate::Binary { op, lhs, rhs } => {
                self.write_bool_operand(*op, lhs);
                self.write_raw(op.as_sql());
                self.write_bool_operand(*op, rhs);
            }
        }
    }

    fn write_bool_operand(&mut self, parent: BoolOp, child: &Predicate) {
        match child.bool_op() {
            Some(op) if op != parent => {
                self.write_char('(');
                self.write_predicate(child);
                self.write_char(')');
            }
            _ => self.write_predicate(child),
        }
    }

    /// Render `<expr> ASC|DESC`.
    pub fn write_order(&mut self, order: &Order) {
        self.write_expr(order.expr());
        self.write_raw(order.direction().as_sql());
    }

    /// SQL written so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Values bound so far, in placeholder order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume the writer, returning the SQL text and values.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.values)
    }
}
