#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use sqlx::sqlite;
use std::{str::FromStr, time::Duration};
use tokio::try_join;
use tracing::{Level, event};

pub mod config;
mod r#impl;
pub mod types;

use config::SqliteConfig;

/// SQLite database implementing every Northwind repository port.
///
/// - `reader`: a pool for queries, allowing concurrent reads
/// - `writer`: a single-connection pool for mutations, so an insert and the
///   `last_insert_rowid` read after it always share a connection
#[derive(Clone, Debug)]
pub struct Db {
    /// Connection pool for read operations
    pub reader: sqlx::Pool<sqlx::Sqlite>,
    /// Connection pool for write operations (limited to 1 connection)
    pub writer: sqlx::Pool<sqlx::Sqlite>,
}

impl Db {
    /// Open the database named by `config.connection_string`.
    ///
    /// Foreign keys are enforced and the journal is switched to WAL. When
    /// `create_schema` is set, the embedded Northwind schema is applied; it
    /// only creates what is missing.
    ///
    /// # Errors
    ///
    /// A missing connection string is reported as
    /// [`sqlx::Error::Configuration`]; callers should treat it as fatal.
    /// Connection and migration failures are passed through.
    pub async fn open(config: &SqliteConfig) -> Result<Self, sqlx::Error> {
        let Some(connection_string) = config.connection_string.as_deref() else {
            event!(Level::ERROR, "no database connection string configured");
            return Err(sqlx::Error::Configuration(
                "a database connection string is required".into(),
            ));
        };

        let options = sqlite::SqliteConnectOptions::from_str(connection_string)?
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true)
            .journal_mode(sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlite::SqliteSynchronous::Normal)
            .pragma("temp_store", "memory")
            .create_if_missing(config.create_if_missing);

        let reader = sqlite::SqlitePoolOptions::new().connect_with(options.clone());
        let writer = sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options);

        let (reader, writer) = try_join!(reader, writer)?;

        if config.create_schema {
            sqlx::migrate!("./schema").run(&writer).await?;
        }

        event!(
            Level::DEBUG,
            database = connection_string,
            "opened northwind database"
        );
        Ok(Self { reader, writer })
    }
}
