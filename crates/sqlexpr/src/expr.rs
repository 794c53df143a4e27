//! Expression algebra: columns, literals, comparisons and AND/OR predicates.
//!
//! Nodes are immutable. Combinators such as [`Predicate::and`] consume their
//! inputs and return a new node; subtrees are shared through `Arc`, so cloning
//! a predicate is cheap and never aliases mutable state.
//!
//! ```ignore
//! use sqlexpr::{col, Value};
//!
//! let p = col("age").gt(18).and(col("deleted_at").eq(Value::Null));
//! // "age" > $1 AND "deleted_at" IS NULL
//! ```

use crate::order::{Direction, Order};
use crate::value::Value;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// A table column reference. Always rendered as a quoted identifier.
#[derive(Debug, Clone)]
pub struct Column(String);

/// Create a column reference.
pub fn col(name: impl Into<String>) -> Column {
    Column::new(name)
}

/// Wrap a value as a literal operand, e.g. to put a literal on the left side
/// of a comparison.
pub fn lit(value: impl Into<Value>) -> Operand {
    Operand::Literal(value.into())
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Column(name.into())
    }

    /// Column name (unquoted).
    pub fn name(&self) -> &str {
        &self.0
    }

    /// `column = other` (`IS NULL` when `other` is the null literal)
    pub fn eq(self, other: impl Into<Operand>) -> Predicate {
        Operand::Column(self).eq(other)
    }

    /// `column <> other` (`IS NOT NULL` when `other` is the null literal)
    pub fn ne(self, other: impl Into<Operand>) -> Predicate {
        Operand::Column(self).ne(other)
    }

    /// `column < other`
    pub fn lt(self, other: impl Into<Operand>) -> Predicate {
        Operand::Column(self).lt(other)
    }

    /// `column > other`
    pub fn gt(self, other: impl Into<Operand>) -> Predicate {
        Operand::Column(self).gt(other)
    }

    /// `column <= other`
    pub fn lte(self, other: impl Into<Operand>) -> Predicate {
        Operand::Column(self).lte(other)
    }

    /// `column >= other`
    pub fn gte(self, other: impl Into<Operand>) -> Predicate {
        Operand::Column(self).gte(other)
    }

    /// Order by this column ascending.
    pub fn asc(self) -> Order {
        Order::new(Direction::Asc, self)
    }

    /// Order by this column descending.
    pub fn desc(self) -> Order {
        Order::new(Direction::Desc, self)
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::new(name)
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column(name)
    }
}

impl From<&String> for Column {
    fn from(name: &String) -> Self {
        Column(name.clone())
    }
}

/// A value-like node: the only thing allowed on either side of a comparison.
#[derive(Debug, Clone)]
pub enum Operand {
    Column(Column),
    Literal(Value),
}

impl Operand {
    /// Check if this is the `NULL` literal.
    pub fn is_null(&self) -> bool {
        matches!(self, Operand::Literal(v) if v.is_null())
    }

    /// Build an operand from a dynamic JSON scalar, failing for arrays and objects.
    pub fn from_json(value: serde_json::Value) -> crate::SqlResult<Self> {
        Value::from_json(value).map(Operand::Literal)
    }

    fn compare(self, op: CmpOp, other: impl Into<Operand>) -> Predicate {
        Predicate::Compare {
            op,
            lhs: self,
            rhs: other.into(),
        }
    }

    /// `self = other`
    pub fn eq(self, other: impl Into<Operand>) -> Predicate {
        self.compare(CmpOp::Eq, other)
    }

    /// `self <> other`
    pub fn ne(self, other: impl Into<Operand>) -> Predicate {
        self.compare(CmpOp::Ne, other)
    }

    /// `self < other`
    pub fn lt(self, other: impl Into<Operand>) -> Predicate {
        self.compare(CmpOp::Lt, other)
    }

    /// `self > other`
    pub fn gt(self, other: impl Into<Operand>) -> Predicate {
        self.compare(CmpOp::Gt, other)
    }

    /// `self <= other`
    pub fn lte(self, other: impl Into<Operand>) -> Predicate {
        self.compare(CmpOp::Le, other)
    }

    /// `self >= other`
    pub fn gte(self, other: impl Into<Operand>) -> Predicate {
        self.compare(CmpOp::Ge, other)
    }
}

impl From<Column> for Operand {
    fn from(c: Column) -> Self {
        Operand::Column(c)
    }
}

impl From<&Column> for Operand {
    fn from(c: &Column) -> Self {
        Operand::Column(c.clone())
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Literal(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        Operand::Literal(v.into())
    }
}

impl TryFrom<serde_json::Value> for Operand {
    type Error = crate::SqlError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Operand::from_json(value)
    }
}

macro_rules! impl_operand_literal {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Literal(Value::from(v))
                }
            }
        )*
    };
}

impl_operand_literal!(
    bool, i8, i16, i32, i64, u8, u16, u32, f32, f64,
    &str, String, &String, Vec<u8>, &[u8], Uuid, DateTime<Utc>,
);

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CmpOp {
    pub fn as_sql(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "<>",
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
            CmpOp::Le => "<=",
            CmpOp::Ge => ">=",
        }
    }
}

/// Boolean connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
}

impl BoolOp {
    /// Connective with surrounding spaces, ready to be written between operands.
    pub fn as_sql(self) -> &'static str {
        match self {
            BoolOp::And => " AND ",
            BoolOp::Or => " OR ",
        }
    }
}

/// Boolean expression usable as a WHERE clause.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// `lhs op rhs`
    Compare { op: CmpOp, lhs: Operand, rhs: Operand },

    /// `lhs AND rhs` / `lhs OR rhs`
    Binary {
        op: BoolOp,
        lhs: Arc<Predicate>,
        rhs: Arc<Predicate>,
    },
}

impl Predicate {
    /// Create a comparison node.
    pub fn compare(op: CmpOp, lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Predicate::Compare {
            op,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    fn binary(op: BoolOp, lhs: Predicate, rhs: Predicate) -> Self {
        Predicate::Binary {
            op,
            lhs: Arc::new(lhs),
            rhs: Arc::new(rhs),
        }
    }

    /// `self AND other`
    pub fn and(self, other: Predicate) -> Self {
        Self::binary(BoolOp::And, self, other)
    }

    /// `self OR other`
    pub fn or(self, other: Predicate) -> Self {
        Self::binary(BoolOp::Or, self, other)
    }

    /// Top-level connective, `None` for a comparison.
    pub fn bool_op(&self) -> Option<BoolOp> {
        match self {
            Predicate::Compare { .. } => None,
            Predicate::Binary { op, .. } => Some(*op),
        }
    }
}

/// Any renderable node.
#[derive(Debug, Clone)]
pub enum Expr {
    Column(Column),
    Literal(Value),
    Predicate(Predicate),
    Order(Order),
}

impl From<Column> for Expr {
    fn from(c: Column) -> Self {
        Expr::Column(c)
    }
}

impl From<Value> for Expr {
    fn from(v: Value) -> Self {
        Expr::Literal(v)
    }
}

impl From<Operand> for Expr {
    fn from(o: Operand) -> Self {
        match o {
            Operand::Column(c) => Expr::Column(c),
            Operand::Literal(v) => Expr::Literal(v),
        }
    }
}

impl From<Predicate> for Expr {
    fn from(p: Predicate) -> Self {
        Expr::Predicate(p)
    }
}

impl From<Order> for Expr {
    fn from(o: Order) -> Self {
        Expr::Order(o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_compare_as_literals() {
        let p = col("name").eq("alice");
        match p {
            Predicate::Compare { op, lhs, rhs } => {
                assert_eq!(op, CmpOp::Eq);
                assert!(matches!(lhs, Operand::Column(ref c) if c.name() == "name"));
                assert!(matches!(rhs, Operand::Literal(Value::Text(ref s)) if s == "alice"));
            }
            Predicate::Binary { .. } => panic!("expected comparison"),
        }
    }

    #[test]
    fn columns_pass_through_as_operands() {
        let p = col("a").lt(col("b"));
        assert!(matches!(
            p,
            Predicate::Compare { rhs: Operand::Column(ref c), .. } if c.name() == "b"
        ));
    }

    #[test]
    fn none_becomes_null_literal() {
        let p = col("a").eq(None::<i32>);
        assert!(matches!(p, Predicate::Compare { ref rhs, .. } if rhs.is_null()));
    }

    #[test]
    fn and_or_build_binary_nodes() {
        let p = col("a").eq(1).and(col("b").eq(2)).or(col("c").eq(3));
        assert_eq!(p.bool_op(), Some(BoolOp::Or));
        match p {
            Predicate::Binary { lhs, rhs, .. } => {
                assert_eq!(lhs.bool_op(), Some(BoolOp::And));
                assert_eq!(rhs.bool_op(), None);
            }
            Predicate::Compare { .. } => panic!("expected binary"),
        }
    }

    #[test]
    fn clones_share_subtrees() {
        let p = col("a").eq(1).and(col("b").eq(2));
        let q = p.clone();
        match (&p, &q) {
            (Predicate::Binary { lhs: l1, .. }, Predicate::Binary { lhs: l2, .. }) => {
                assert!(Arc::ptr_eq(l1, l2));
            }
            _ => panic!("expected binary"),
        }
    }

    #[test]
    fn operand_from_json_rejects_objects() {
        assert!(Operand::from_json(json!(1)).is_ok());
        assert!(matches!(
            Operand::try_from(json!({"k": "v"})),
            Err(crate::SqlError::UnsupportedType(_))
        ));
    }

    #[test]
    fn operator_tokens() {
        let tokens: Vec<_> = [CmpOp::Eq, CmpOp::Ne, CmpOp::Lt, CmpOp::Gt, CmpOp::Le, CmpOp::Ge]
            .into_iter()
            .map(CmpOp::as_sql)
            .collect();
        assert_eq!(tokens, ["=", "<>", "<", ">", "<=", ">="]);
        assert_eq!(BoolOp::And.as_sql(), " AND ");
        assert_eq!(BoolOp::Or.as_sql(), " OR ");
    }
}
