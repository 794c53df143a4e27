//! Statement builders.
//!
//! Statements are plain records with consuming setters. Nothing is rendered
//! until a [`Builder`] walks the statement through a fresh
//! [`SqlWriter`](crate::writer::SqlWriter).
//!
//! # Usage
//!
//! ```ignore
//! use sqlexpr::{Builder, Dialect, col, desc, qb};
//!
//! let b = Builder::new(Dialect::Postgres);
//!
//! // SELECT "id", "name" FROM "users" WHERE "status" = $1 ORDER BY "created_at" DESC LIMIT 20
//! let q = b.build(
//!     &qb::select("users")
//!         .columns(["id", "name"])
//!         .filter(col("status").eq("active"))
//!         .order_by([desc("created_at")])
//!         .limit(20),
//! )?;
//!
//! // INSERT INTO "users" ("name") VALUES ($1) RETURNING "id"
//! let q = b.build(&qb::insert("users").set("name", "alice").returning(["id"]))?;
//!
//! // UPDATE "users" SET "status" = $1 WHERE "id" = $2
//! let q = b.build(&qb::update("users").set("status", "inactive").filter(col("id").eq(7)))?;
//!
//! // DELETE FROM "users" WHERE "id" = $1
//! let q = b.build(&qb::delete("users").filter(col("id").eq(7)))?;
//! q.execute(&client).await?;
//! ```

mod builder;
mod delete;
mod insert;
pub mod pg;
mod select;
mod traits;
mod update;

pub use builder::Builder;
pub use delete::DeleteQb;
pub use insert::InsertQb;
pub use pg::PgInsertQb;
pub use select::SelectQb;
pub use traits::{BuiltQuery, SqlQb};
pub use update::UpdateQb;

use crate::error::{SqlError, SqlResult};
use crate::expr::{Column, Predicate};
use crate::writer::SqlWriter;

/// Create a SELECT statement.
pub fn select(table: impl Into<String>) -> SelectQb {
    SelectQb::new(table)
}

/// Create an INSERT statement.
pub fn insert(table: impl Into<String>) -> InsertQb {
    InsertQb::new(table)
}

/// Create an UPDATE statement.
pub fn update(table: impl Into<String>) -> UpdateQb {
    UpdateQb::new(table)
}

/// Create a DELETE statement.
pub fn delete(table: impl Into<String>) -> DeleteQb {
    DeleteQb::new(table)
}

/// Write ` WHERE <predicate>`, or the `1 = 1` tautology when there is none.
pub(crate) fn write_where(w: &mut SqlWriter, predicate: Option<&Predicate>) {
    w.write_raw(" WHERE ");
    match predicate {
        Some(p) => w.write_predicate(p),
        None => w.write_raw("1 = 1"),
    }
}

/// Column and value lists of INSERT/UPDATE must be non-empty and aligned.
pub(crate) fn check_assignments(
    statement: &'static str,
    columns: &[Column],
    values: usize,
) -> SqlResult<()> {
    if columns.is_empty() {
        return Err(SqlError::EmptyColumns { statement });
    }
    if columns.len() != values {
        return Err(SqlError::ColumnCountMismatch {
            statement,
            columns: columns.len(),
            values,
        });
    }
    Ok(())
}

/// Combine an existing filter with a new one using AND.
pub(crate) fn and_predicate(current: Option<Predicate>, next: Predicate) -> Predicate {
    match current {
        Some(p) => p.and(next),
        None => next,
    }
}
