//! Builder configuration.

use crate::dialect::Dialect;
use tracing::Level;

/// Configuration for a [`Builder`](crate::qb::Builder).
///
/// By default statements render for Postgres and SQL logging is disabled.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Target dialect (quoting and placeholder style).
    pub dialect: Dialect,
    /// Emit a `tracing` event for every rendered statement.
    pub log_sql: bool,
    /// Tracing event level for rendered statements.
    pub log_level: Level,
    /// Truncate logged SQL (in bytes, on a char boundary). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            log_sql: false,
            log_level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target dialect.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Log every rendered statement.
    pub fn enable_logging(mut self) -> Self {
        self.log_sql = true;
        self
    }

    /// Stop logging rendered statements.
    pub fn disable_logging(mut self) -> Self {
        self.log_sql = false;
        self
    }

    /// Override the tracing event level.
    pub fn log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Set maximum SQL length to log.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = BuilderConfig::new();
        assert_eq!(cfg.dialect, Dialect::Postgres);
        assert!(!cfg.log_sql);
        assert_eq!(cfg.log_level, Level::DEBUG);
        assert_eq!(cfg.max_sql_length, Some(200));
    }

    #[test]
    fn setters_chain() {
        let cfg = BuilderConfig::new()
            .dialect(Dialect::Sqlite)
            .enable_logging()
            .log_level(Level::INFO)
            .no_truncate();
        assert_eq!(cfg.dialect, Dialect::Sqlite);
        assert!(cfg.log_sql);
        assert_eq!(cfg.log_level, Level::INFO);
        assert_eq!(cfg.max_sql_length, None);
        assert!(!cfg.disable_logging().log_sql);
    }
}
