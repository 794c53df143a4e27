//! # sqlexpr
//!
//! A typed SQL statement builder.
//!
//! Statements are assembled from expression objects instead of string
//! concatenation, then rendered by a dialect-bound [`Builder`] into SQL text
//! plus an ordered list of bound values.
//!
//! ## Features
//!
//! - **Expression algebra**: columns, literals, comparisons and AND/OR trees
//! - **Minimal parentheses**: a nested group is wrapped only when its connective differs
//! - **No string replacement**: placeholders are numbered while rendering
//! - **Dialects**: Postgres (`$N`) and SQLite (`?N`)
//! - **Execution**: run a rendered statement on a `tokio_postgres` client or transaction
//!
//! ## Example
//!
//! ```ignore
//! use sqlexpr::{Builder, Dialect, Value, col, desc, qb};
//!
//! let b = Builder::new(Dialect::Postgres);
//! let q = b.build(
//!     &qb::select("users")
//!         .columns(["id", "name"])
//!         .filter(col("age").gt(18).and(col("deleted_at").eq(Value::Null)))
//!         .order_by([desc("created_at")])
//!         .limit(10),
//! )?;
//! // SELECT "id", "name" FROM "users" WHERE "age" > $1 AND "deleted_at" IS NULL
//! //   ORDER BY "created_at" DESC LIMIT 10
//! let rows = q.fetch_all(&client).await?;
//! ```

pub mod client;
pub mod config;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod order;
pub mod qb;
mod trace;
pub mod value;
pub mod writer;

pub use client::Executor;
pub use config::BuilderConfig;
pub use dialect::Dialect;
pub use error::{SqlError, SqlResult};
pub use expr::{BoolOp, CmpOp, Column, Expr, Operand, Predicate, col, lit};
pub use order::{Direction, IntoOrder, Order, asc, desc};
pub use qb::{
    Builder, BuiltQuery, DeleteQb, InsertQb, PgInsertQb, SelectQb, SqlQb, UpdateQb, delete,
    insert, select, update,
};
pub use value::Value;
pub use writer::SqlWriter;
