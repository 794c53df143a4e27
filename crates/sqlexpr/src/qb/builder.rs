//! Dialect-bound renderer.

use crate::config::BuilderConfig;
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::qb::traits::{BuiltQuery, SqlQb};
use crate::qb::{DeleteQb, InsertQb, SelectQb, UpdateQb};
use crate::trace;
use crate::writer::SqlWriter;

/// Renders statements for one dialect.
///
/// The dialect is fixed at construction. Every [`Builder::build`] call starts
/// from an empty [`SqlWriter`], so placeholder numbering restarts at 1 and
/// rendering the same statement twice yields identical output.
///
/// # Example
/// ```ignore
/// use sqlexpr::{Builder, Dialect, col};
///
/// let b = Builder::new(Dialect::Postgres);
/// let q = b.build(&b.delete("t1").filter(col("c1").eq(123)))?;
/// assert_eq!(q.sql, r#"DELETE FROM "t1" WHERE "c1" = $1"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    config: BuilderConfig,
}

impl Builder {
    /// Create a builder for the given dialect with default settings.
    pub fn new(dialect: Dialect) -> Self {
        Self::from_config(BuilderConfig::new().dialect(dialect))
    }

    /// Create a builder from a full configuration.
    pub fn from_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn dialect(&self) -> Dialect {
        self.config.dialect
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Render a statement into SQL text and positional values.
    pub fn build<Q: SqlQb + ?Sized>(&self, query: &Q) -> SqlResult<BuiltQuery> {
        let mut w = SqlWriter::new(self.config.dialect);
        query.write_query(&mut w)?;
        let (sql, values) = w.finish();
        if self.config.log_sql {
            trace::emit_rendered(
                self.config.log_level,
                self.config.dialect,
                &sql,
                values.len(),
                self.config.max_sql_length,
            );
        }
        Ok(BuiltQuery::new(sql, values))
    }

    /// Render a statement and return only the SQL text.
    pub fn to_sql<Q: SqlQb + ?Sized>(&self, query: &Q) -> SqlResult<String> {
        self.build(query).map(|q| q.sql)
    }

    /// Create a SELECT statement for the given table.
    pub fn select(&self, table: impl Into<String>) -> SelectQb {
        SelectQb::new(table)
    }

    /// Create an INSERT statement for the given table.
    pub fn insert(&self, table: impl Into<String>) -> InsertQb {
        InsertQb::new(table)
    }

    /// Create an UPDATE statement for the given table.
    pub fn update(&self, table: impl Into<String>) -> UpdateQb {
        UpdateQb::new(table)
    }

    /// Create a DELETE statement for the given table.
    pub fn delete(&self, table: impl Into<String>) -> DeleteQb {
        DeleteQb::new(table)
    }
}
