use clap::Parser as _;
use northwind_cli::{AppConfig, Cli, Command, Table, commands};
use northwind_core::Gateway;
use northwind_sqlite::{Db, config::SqliteConfig};
use rstest::rstest;
use serde_json::json;

async fn gateway() -> anyhow::Result<Gateway<Db>> {
    Ok(Gateway::new(Db::open(&SqliteConfig::in_memory()).await?))
}

#[rstest]
#[case(&["northwind", "list", "category"], Table::Category)]
#[case(&["northwind", "list", "order-detail"], Table::OrderDetail)]
#[case(&["northwind", "list", "alphabetical-list-of-products"], Table::AlphabeticalListOfProducts)]
#[case(&["northwind", "list", "sales-by-year"], Table::SalesByYear)]
fn test_table_names(#[case] args: &[&str], #[case] expected: Table) {
    let cli = Cli::try_parse_from(args).unwrap();
    assert!(matches!(cli.command, Command::List { table } if table == expected));
}

#[test]
fn test_database_flag_wins() {
    let cli = Cli::try_parse_from([
        "northwind",
        "--database",
        ":memory:",
        "get",
        "customer",
        "ALFKI",
    ])
    .unwrap();
    let config = AppConfig::load(&cli).unwrap();
    assert_eq!(config.database.connection_string.as_deref(), Some(":memory:"));
    assert!(config.database.create_schema);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let cli = Cli::try_parse_from([
        "northwind",
        "--database",
        ":memory:",
        "--config",
        "/nonexistent/northwind.toml",
        "list",
        "shipper",
    ])
    .unwrap();
    assert!(AppConfig::load(&cli).is_err());
}

#[tokio::test]
async fn test_insert_get_delete() -> anyhow::Result<()> {
    let gateway = gateway().await?;

    let inserted = commands::run(
        &gateway,
        Command::Insert {
            table: Table::Shipper,
            json: r#"{"companyName":"Speedy Express","phone":"(503) 555-9831"}"#.into(),
        },
    )
    .await?;
    assert!(inserted.success);
    assert_eq!(
        inserted.body,
        json!({
            "success": true,
            "data": { "shipperId": 1, "companyName": "Speedy Express", "phone": "(503) 555-9831" },
            "errorMessages": []
        })
    );

    let fetched = commands::run(
        &gateway,
        Command::Get {
            table: Table::Shipper,
            key: "1".into(),
        },
    )
    .await?;
    assert_eq!(fetched.body["data"]["companyName"], "Speedy Express");

    let deleted = commands::run(
        &gateway,
        Command::Delete {
            table: Table::Shipper,
            key: "1".into(),
        },
    )
    .await?;
    assert_eq!(deleted.body, json!({ "success": true, "data": true, "errorMessages": [] }));

    let again = commands::run(
        &gateway,
        Command::Delete {
            table: Table::Shipper,
            key: "1".into(),
        },
    )
    .await?;
    assert!(!again.success);
    assert_eq!(
        again.body,
        json!({
            "success": false,
            "data": false,
            "errorMessages": ["Shipper with ID 1 not found"]
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_views_are_read_only() -> anyhow::Result<()> {
    let gateway = gateway().await?;

    let listed = commands::run(
        &gateway,
        Command::List {
            table: Table::Invoice,
        },
    )
    .await?;
    assert_eq!(listed.body, json!({ "success": true, "data": [], "errorMessages": [] }));

    let deleted = commands::run(
        &gateway,
        Command::Delete {
            table: Table::SalesByYear,
            key: "10248".into(),
        },
    )
    .await?;
    assert!(!deleted.success);
    assert_eq!(
        deleted.body["errorMessages"][0],
        "Delete is not supported for view Summary of Sales by Year"
    );

    Ok(())
}

#[tokio::test]
async fn test_bad_input_is_an_error() -> anyhow::Result<()> {
    let gateway = gateway().await?;

    let bad_key = commands::run(
        &gateway,
        Command::Get {
            table: Table::OrderDetail,
            key: "10248".into(),
        },
    )
    .await;
    assert!(bad_key.is_err());

    let bad_json = commands::run(
        &gateway,
        Command::Insert {
            table: Table::Category,
            json: "{not json".into(),
        },
    )
    .await;
    assert!(bad_json.is_err());

    Ok(())
}
