use northwind_cli::{AppConfig, Cli, commands};
use northwind_core::Gateway;
use northwind_sqlite::Db;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // stdout carries the JSON envelope, so diagnostics go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::import().unwrap_or_else(|err| err.exit());

    // Without a connection string there is nothing to do; fail before opening.
    let AppConfig { database } = AppConfig::load(&cli)?;
    let db = Db::open(&database).await?;
    let gateway = Gateway::new(db);

    let rendered = commands::run(&gateway, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&rendered.body)?);

    Ok(if rendered.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
