//! ORDER BY expressions.

use crate::expr::{Column, Expr, Operand, Predicate};
use std::sync::Arc;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Keyword with a leading space, written after the ordered expression.
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => " ASC",
            Direction::Desc => " DESC",
        }
    }
}

/// An expression with a sort direction.
///
/// Never nests: wrapping an `Order` keeps its inner expression and replaces
/// the direction.
#[derive(Debug, Clone)]
pub struct Order {
    direction: Direction,
    expr: Arc<Expr>,
}

impl Order {
    pub fn new(direction: Direction, expr: impl Into<Expr>) -> Self {
        match expr.into() {
            Expr::Order(inner) => inner.with_direction(direction),
            expr => Order {
                direction,
                expr: Arc::new(expr),
            },
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The ordered expression (never itself an `Order`).
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Same expression, new direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// Inputs accepted by [`asc`], [`desc`] and `ORDER BY` lists.
///
/// Plain strings name a column. Anything that is not already an [`Order`]
/// sorts ascending.
pub trait IntoOrder {
    fn into_order(self) -> Order;
}

impl IntoOrder for Order {
    fn into_order(self) -> Order {
        self
    }
}

impl IntoOrder for Expr {
    fn into_order(self) -> Order {
        Order::new(Direction::Asc, self)
    }
}

impl IntoOrder for Column {
    fn into_order(self) -> Order {
        Order::new(Direction::Asc, self)
    }
}

impl IntoOrder for Operand {
    fn into_order(self) -> Order {
        Order::new(Direction::Asc, self)
    }
}

impl IntoOrder for Predicate {
    fn into_order(self) -> Order {
        Order::new(Direction::Asc, self)
    }
}

impl IntoOrder for &str {
    fn into_order(self) -> Order {
        Order::new(Direction::Asc, Column::from(self))
    }
}

impl IntoOrder for String {
    fn into_order(self) -> Order {
        Order::new(Direction::Asc, Column::from(self))
    }
}

impl IntoOrder for &String {
    fn into_order(self) -> Order {
        Order::new(Direction::Asc, Column::from(self))
    }
}

/// Sort ascending. An existing order is unwrapped and re-directed.
pub fn asc(x: impl IntoOrder) -> Order {
    x.into_order().with_direction(Direction::Asc)
}

/// Sort descending. An existing order is unwrapped and re-directed.
pub fn desc(x: impl IntoOrder) -> Order {
    x.into_order().with_direction(Direction::Desc)
}
