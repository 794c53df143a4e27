//! `tracing` helpers for rendered and executed statements.

use crate::dialect::Dialect;
use std::borrow::Cow;
use tracing::Level;

/// Dispatch a tracing event at a runtime-determined level.
macro_rules! emit_at_level {
    ($level:expr, $($field:tt)*) => {
        match $level {
            Level::ERROR => tracing::error!($($field)*),
            Level::WARN  => tracing::warn!($($field)*),
            Level::INFO  => tracing::info!($($field)*),
            Level::DEBUG => tracing::debug!($($field)*),
            Level::TRACE => tracing::trace!($($field)*),
        }
    };
}

pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

pub(crate) fn truncate_sql(sql: &str, max: Option<usize>) -> Cow<'_, str> {
    match max {
        Some(max) if sql.len() > max => Cow::Owned(format!("{}...", truncate_sql_bytes(sql, max))),
        _ => Cow::Borrowed(sql),
    }
}

pub(crate) fn emit_rendered(
    level: Level,
    dialect: Dialect,
    sql: &str,
    param_count: usize,
    max_sql_length: Option<usize>,
) {
    let sql = truncate_sql(sql, max_sql_length);
    emit_at_level!(
        level,
        target: "sqlexpr.sql",
        %dialect,
        param_count,
        sql = %sql,
        "rendered statement"
    );
}
