use northwind_core::{
    Gateway,
    models::{Category, Shipper},
};
use serde_json::json;
use northwind_sqlite::{Db, config::SqliteConfig};

#[tokio::test]
async fn test_missing_connection_string_is_fatal() {
    let result = Db::open(&SqliteConfig::default()).await;
    assert!(matches!(result, Err(sqlx::Error::Configuration(_))));
}

#[tokio::test]
async fn test_schema_can_be_skipped() -> anyhow::Result<()> {
    let config = SqliteConfig {
        create_schema: false,
        ..SqliteConfig::in_memory()
    };
    let gateway = Gateway::new(Db::open(&config).await?);

    // without tables every call fails with the driver's message
    let listed = gateway.list::<Shipper>().await;
    assert!(!listed.is_success());
    assert!(
        listed
            .error_messages()
            .iter()
            .any(|message| message.contains("no such table"))
    );
    let body = serde_json::to_value(&listed)?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"], json!([]));

    let deleted = gateway.delete::<Category>(999).await;
    let body = serde_json::to_value(&deleted)?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"], json!(false));

    Ok(())
}

#[tokio::test]
async fn test_schema_is_idempotent() -> anyhow::Result<()> {
    let db = Db::open(&SqliteConfig::in_memory()).await?;
    // a second pass over an already-created catalog changes nothing
    sqlx::raw_sql(include_str!("../schema/0001_northwind.sql"))
        .execute(&db.writer)
        .await?;

    let gateway = Gateway::new(db);
    assert!(gateway.list::<Shipper>().await.is_success());

    Ok(())
}
