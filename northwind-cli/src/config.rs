//! Application configuration management.

use crate::Cli;
use northwind_sqlite::config::SqliteConfig;
use serde::{Deserialize, Serialize};

/// The main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Database configuration
    #[serde(default)]
    pub database: SqliteConfig,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. `--database` / `NORTHWIND_DATABASE` (highest priority)
    /// 2. Environment variables
    /// 3. Config file given by the CLI
    /// 4. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `APP_<SECTION>__<KEY>` to `<section>.<key>`, e.g.
    /// `APP_DATABASE__CONNECTION_STRING`.
    ///
    /// Fails when no source supplies a connection string.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(database) = &cli.database {
            config = config.set_override("database.connection_string", database.as_str())?;
        }

        let loaded: Self = config.build()?.try_deserialize()?;
        if loaded.database.connection_string.is_none() {
            return Err(anyhow::anyhow!(
                "no database connection string: pass --database, or set NORTHWIND_DATABASE \
                 or APP_DATABASE__CONNECTION_STRING"
            ));
        }
        Ok(loaded)
    }
}
