//! Configuration for the SQLite connection.

use serde::{Deserialize, Serialize};

/// Controls how [`Db::open`](crate::Db::open) connects.
///
/// ```
/// use northwind_sqlite::config::SqliteConfig;
///
/// let config = SqliteConfig {
///     connection_string: Some("sqlite://northwind.db".into()),
///     ..Default::default()
/// };
/// assert!(config.create_schema);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    /// A sqlx SQLite URL or file path, e.g. `sqlite://northwind.db` or
    /// `:memory:`. Required; there is no implicit default database.
    pub connection_string: Option<String>,

    /// Whether to create the database file if it doesn't exist
    #[serde(default = "default_true")]
    pub create_if_missing: bool,

    /// Whether to apply the embedded Northwind schema on open
    #[serde(default = "default_true")]
    pub create_schema: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            create_if_missing: true,
            create_schema: true,
        }
    }
}

impl SqliteConfig {
    /// A fresh, private in-memory database with the schema applied.
    pub fn in_memory() -> Self {
        Self {
            connection_string: Some(":memory:".into()),
            ..Default::default()
        }
    }
}
