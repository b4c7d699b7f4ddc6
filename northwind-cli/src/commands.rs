//! Dispatch of parsed commands onto the gateway.

use crate::{Command, Table};
use northwind_core::{
    Gateway,
    models::{
        AlphabeticalListOfProduct, Category, Customer, CustomerDemographic, Employee, Entity,
        Invoice, Order, OrderDetail, Outcome, Payload, Product, ProductsByCategory, Region,
        SalesByYear, Shipper, Supplier, Territory, View,
    },
    ports::{CrudRepository, ViewRepository},
};
use northwind_sqlite::Db;
use serde::{Serialize, de::DeserializeOwned};
use std::str::FromStr;
use tracing::{Level, event};

/// The envelope of one command, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Mirrors the envelope's `success` flag
    pub success: bool,
    /// The serialized envelope
    pub body: serde_json::Value,
}

/// Run one command against the gateway.
///
/// Malformed keys or JSON are reported as `Err`; everything the gateway
/// itself reports, including failures, comes back as a [`Rendered`] envelope.
pub async fn run(gateway: &Gateway<Db>, command: Command) -> anyhow::Result<Rendered> {
    event!(Level::DEBUG, ?command, "running command");

    let (table, request) = match command {
        Command::List { table } => (table, Request::List),
        Command::Get { table, key } => (table, Request::Get(key)),
        Command::Insert { table, json } => (table, Request::Insert(json)),
        Command::Update { table, json } => (table, Request::Update(json)),
        Command::Delete { table, key } => (table, Request::Delete(key)),
    };

    match table {
        Table::Category => entity::<Category>(gateway, request).await,
        Table::Customer => entity::<Customer>(gateway, request).await,
        Table::CustomerDemographic => entity::<CustomerDemographic>(gateway, request).await,
        Table::Employee => entity::<Employee>(gateway, request).await,
        Table::Order => entity::<Order>(gateway, request).await,
        Table::OrderDetail => entity::<OrderDetail>(gateway, request).await,
        Table::Product => entity::<Product>(gateway, request).await,
        Table::Region => entity::<Region>(gateway, request).await,
        Table::Shipper => entity::<Shipper>(gateway, request).await,
        Table::Supplier => entity::<Supplier>(gateway, request).await,
        Table::Territory => entity::<Territory>(gateway, request).await,
        Table::Invoice => view::<Invoice>(gateway, request).await,
        Table::AlphabeticalListOfProducts => {
            view::<AlphabeticalListOfProduct>(gateway, request).await
        }
        Table::ProductsByCategory => view::<ProductsByCategory>(gateway, request).await,
        Table::SalesByYear => view::<SalesByYear>(gateway, request).await,
    }
}

enum Request {
    List,
    Get(String),
    Insert(String),
    Update(String),
    Delete(String),
}

async fn entity<E>(gateway: &Gateway<Db>, request: Request) -> anyhow::Result<Rendered>
where
    E: Entity + Serialize + DeserializeOwned,
    E::Key: FromStr,
    <E::Key as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    Db: CrudRepository<E>,
{
    match request {
        Request::List => render(gateway.list::<E>().await),
        Request::Get(key) => render(gateway.get::<E>(key.parse()?).await),
        Request::Insert(json) => render(gateway.insert(serde_json::from_str::<E>(&json)?).await),
        Request::Update(json) => render(gateway.update(serde_json::from_str::<E>(&json)?).await),
        Request::Delete(key) => render(gateway.delete::<E>(key.parse()?).await),
    }
}

async fn view<V>(gateway: &Gateway<Db>, request: Request) -> anyhow::Result<Rendered>
where
    V: View + Serialize + DeserializeOwned,
    V::Key: FromStr,
    <V::Key as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    Db: ViewRepository<V>,
{
    match request {
        Request::List => render(gateway.list_view::<V>().await),
        Request::Get(key) => render(gateway.get_view::<V>(key.parse()?).await),
        Request::Insert(json) => {
            render(gateway.insert_view(serde_json::from_str::<V>(&json)?).await)
        }
        Request::Update(json) => {
            render(gateway.update_view(serde_json::from_str::<V>(&json)?).await)
        }
        Request::Delete(key) => render(gateway.delete_view::<V>(key.parse()?).await),
    }
}

fn render<T: Serialize + Payload>(outcome: Outcome<T>) -> anyhow::Result<Rendered> {
    Ok(Rendered {
        success: outcome.is_success(),
        body: serde_json::to_value(&outcome)?,
    })
}
