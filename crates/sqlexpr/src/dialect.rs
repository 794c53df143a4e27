//! SQL dialects.
//!
//! A [`Dialect`] only decides two things: how identifiers are quoted and how a
//! positional placeholder is spelled. Everything else about rendering is shared.

use crate::error::SqlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target SQL engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// SQLite: `"ident"`, `?1, ?2, ...`
    Sqlite,
    /// PostgreSQL: `"ident"`, `$1, $2, ...`
    #[default]
    Postgres,
}

impl Dialect {
    /// Dialect name as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::Postgres => "postgres",
        }
    }

    /// Append `name` as a quoted identifier, doubling embedded `"`.
    pub fn write_ident(self, out: &mut String, name: &str) {
        match self {
            Dialect::Sqlite | Dialect::Postgres => {
                out.push('"');
                for ch in name.chars() {
                    if ch == '"' {
                        out.push_str("\"\"");
                    } else {
                        out.push(ch);
                    }
                }
                out.push('"');
            }
        }
    }

    /// Append the placeholder for the given 1-based parameter index.
    pub fn write_placeholder(self, out: &mut String, index: usize) {
        let prefix = match self {
            Dialect::Sqlite => '?',
            Dialect::Postgres => '$',
        };
        out.push(prefix);
        out.push_str(&index.to_string());
    }

    /// Quoted form of `name`.
    pub fn quote_ident(self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        self.write_ident(&mut out, name);
        out
    }

    /// Placeholder for the given 1-based parameter index.
    pub fn placeholder(self, index: usize) -> String {
        let mut out = String::with_capacity(4);
        self.write_placeholder(&mut out, index);
        out
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            _ => Err(SqlError::UnknownDialect(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_simple() {
        assert_eq!(Dialect::Postgres.quote_ident("users"), r#""users""#);
        assert_eq!(Dialect::Sqlite.quote_ident("users"), r#""users""#);
    }

    #[test]
    fn quote_escapes_embedded_quotes() {
        assert_eq!(Dialect::Postgres.quote_ident(r#"has"quote"#), r#""has""quote""#);
        assert_eq!(Dialect::Postgres.quote_ident(r#"""#), r#""""""#);
    }

    #[test]
    fn placeholders() {
        assert_eq!(Dialect::Postgres.placeholder(1), "$1");
        assert_eq!(Dialect::Postgres.placeholder(12), "$12");
        assert_eq!(Dialect::Sqlite.placeholder(3), "?3");
    }

    #[test]
    fn parse_names() {
        assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!(" pg ".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("sqlite3".parse::<Dialect>().unwrap(), Dialect::Sqlite);
        assert!(matches!(
            "mysql".parse::<Dialect>(),
            Err(SqlError::UnknownDialect(name)) if name == "mysql"
        ));
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Dialect::Sqlite).unwrap(), r#""sqlite""#);
        let d: Dialect = serde_json::from_str(r#""postgres""#).unwrap();
        assert_eq!(d, Dialect::Postgres);
    }

    #[test]
    fn default_is_postgres() {
        assert_eq!(Dialect::default(), Dialect::Postgres);
    }
}
