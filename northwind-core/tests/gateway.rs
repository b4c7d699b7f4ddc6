use northwind_core::{
    Gateway,
    models::{Entity, SalesByYear, Shipper, View},
    ports::{CrudRepository, Repository, ViewRepository},
};
use rstest::*;
use std::{
    collections::BTreeMap,
    io,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

/// A BTreeMap-backed store for shippers that can be told to fail.
#[derive(Default)]
struct MemoryStore {
    shippers: Mutex<BTreeMap<i64, Shipper>>,
    broken: AtomicBool,
}

impl MemoryStore {
    fn check(&self) -> Result<(), io::Error> {
        if self.broken.load(Ordering::Relaxed) {
            Err(io::Error::other("database is locked"))
        } else {
            Ok(())
        }
    }
}

impl Repository for MemoryStore {
    type Error = io::Error;
}

impl CrudRepository<Shipper> for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Shipper>, Self::Error> {
        self.check()?;
        Ok(self.shippers.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_key(&self, key: i64) -> Result<Option<Shipper>, Self::Error> {
        self.check()?;
        Ok(self.shippers.lock().unwrap().get(&key).cloned())
    }

    async fn insert(&self, mut entity: Shipper) -> Result<Shipper, Self::Error> {
        self.check()?;
        let mut shippers = self.shippers.lock().unwrap();
        entity.shipper_id = shippers.keys().next_back().copied().unwrap_or(0) + 1;
        shippers.insert(entity.shipper_id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Shipper) -> Result<Option<Shipper>, Self::Error> {
        self.check()?;
        let mut shippers = self.shippers.lock().unwrap();
        Ok(shippers
            .get_mut(&entity.key())
            .map(|slot| {
                *slot = entity.clone();
                entity
            }))
    }

    async fn delete(&self, key: i64) -> Result<bool, Self::Error> {
        self.check()?;
        Ok(self.shippers.lock().unwrap().remove(&key).is_some())
    }
}

impl ViewRepository<SalesByYear> for MemoryStore {
    async fn list_all(&self) -> Result<Vec<SalesByYear>, Self::Error> {
        self.check()?;
        Ok(vec![SalesByYear {
            order_id: 10248,
            ..Default::default()
        }])
    }

    async fn get_by_key(&self, key: i64) -> Result<Option<SalesByYear>, Self::Error> {
        self.check()?;
        Ok((key == 10248).then(|| SalesByYear {
            order_id: key,
            ..Default::default()
        }))
    }
}

#[fixture]
fn gateway() -> Gateway<MemoryStore> {
    Gateway::new(MemoryStore::default())
}

fn shipper(name: &str) -> Shipper {
    Shipper {
        company_name: name.to_owned(),
        phone: Some("(503) 555-9831".to_owned()),
        ..Default::default()
    }
}

#[rstest]
#[tokio::test]
async fn insert_then_get(gateway: Gateway<MemoryStore>) -> anyhow::Result<()> {
    let created = gateway.insert(shipper("Federal Shipping")).await;
    assert!(created.is_success());
    let id = created.data().map(|s| s.shipper_id).unwrap_or_default();
    assert!(id > 0);

    let fetched = gateway.get::<Shipper>(id).await.into_data();
    assert_eq!(fetched.map(|s| s.company_name).as_deref(), Some("Federal Shipping"));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn list_returns_every_row(gateway: Gateway<MemoryStore>) {
    gateway.insert(shipper("Speedy Express")).await;
    gateway.insert(shipper("United Package")).await;

    let listed = gateway.list::<Shipper>().await;
    assert!(listed.is_success());
    assert_eq!(listed.data().map(Vec::len), Some(2));
    assert!(listed.error_messages().is_empty());
}

#[rstest]
#[tokio::test]
async fn missing_keys_are_failures(gateway: Gateway<MemoryStore>) {
    let got = gateway.get::<Shipper>(9).await;
    assert_eq!(got.error_messages(), ["Shipper with ID 9 not found"]);

    let updated = gateway
        .update(Shipper {
            shipper_id: 9,
            ..shipper("Nobody")
        })
        .await;
    assert_eq!(updated.error_messages(), ["Shipper with ID 9 not found"]);

    let deleted = gateway.delete::<Shipper>(9).await;
    assert!(!deleted.is_success());
    assert_eq!(deleted.data(), None);
    assert_eq!(deleted.error_messages(), ["Shipper with ID 9 not found"]);
}

#[rstest]
#[tokio::test]
async fn delete_entity_uses_its_key(gateway: Gateway<MemoryStore>) {
    let created = gateway
        .insert(shipper("Speedy Express"))
        .await
        .into_data()
        .unwrap();

    let deleted = gateway.delete_entity(&created).await;
    assert_eq!(deleted.data(), Some(&true));
    assert!(!gateway.get::<Shipper>(created.shipper_id).await.is_success());
}

#[rstest]
#[tokio::test]
async fn infrastructure_errors_become_failures(gateway: Gateway<MemoryStore>) {
    gateway.repository().broken.store(true, Ordering::Relaxed);

    let listed = gateway.list::<Shipper>().await;
    assert_eq!(listed.error_messages(), ["database is locked"]);

    let inserted = gateway.insert(shipper("Federal Shipping")).await;
    assert_eq!(inserted.error_messages(), ["database is locked"]);
}

#[rstest]
#[case::insert("Insert")]
#[case::update("Update")]
#[case::delete("Delete")]
#[tokio::test]
async fn views_reject_mutations(gateway: Gateway<MemoryStore>, #[case] operation: &str) {
    let row = SalesByYear {
        order_id: 10248,
        ..Default::default()
    };
    let messages = match operation {
        "Insert" => gateway.insert_view(row).await.error_messages().to_vec(),
        "Update" => gateway.update_view(row).await.error_messages().to_vec(),
        _ => gateway
            .delete_view::<SalesByYear>(row.order_id)
            .await
            .error_messages()
            .to_vec(),
    };
    assert_eq!(
        messages,
        [format!("{operation} is not supported for view {}", SalesByYear::NAME)]
    );
}

#[rstest]
#[tokio::test]
async fn views_can_be_read(gateway: Gateway<MemoryStore>) {
    let rows = gateway.list_view::<SalesByYear>().await;
    assert_eq!(rows.data().map(Vec::len), Some(1));

    assert!(gateway.get_view::<SalesByYear>(10248).await.is_success());
    let missing = gateway.get_view::<SalesByYear>(1).await;
    assert_eq!(
        missing.error_messages(),
        ["Summary of Sales by Year with key 1 not found"]
    );
}
