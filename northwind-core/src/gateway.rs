use crate::{
    models::{Entity, Outcome, View},
    ports::{CrudRepository, Rejection, Repository, ViewRepository},
};
use tracing::{Level, event};

/// The caller-facing data-access gateway.
///
/// A `Gateway` wraps one storage backend and exposes the same five operations
/// for every entity (`list`, `get`, `insert`, `update`, `delete`) plus the
/// read operations for every view. Each returns an [`Outcome`]: expected
/// failures and infrastructure errors are folded into its message list, so no
/// method here returns `Err` or panics.
///
/// ```ignore
/// let gateway = Gateway::new(db);
/// let beverages = Category {
///     category_name: Some("Beverages".into()),
///     ..Default::default()
/// };
/// let created = gateway.insert(beverages).await;
/// let id = created.data().map(|c| c.category_id);
/// ```
#[derive(Debug, Clone)]
pub struct Gateway<R> {
    repository: R,
}

impl<R: Repository> Gateway<R> {
    /// Wrap a storage backend.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// The wrapped backend.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Fetch every row of an entity.
    pub async fn list<E: Entity>(&self) -> Outcome<Vec<E>>
    where
        R: CrudRepository<E>,
    {
        let rows = CrudRepository::<E>::list_all(&self.repository).await;
        settle(E::NAME, "list", rows.map(Ok))
    }

    /// Fetch one entity by key; a missing row is a failure, not a fault.
    pub async fn get<E: Entity>(&self, key: E::Key) -> Outcome<E>
    where
        R: CrudRepository<E>,
    {
        let row = CrudRepository::<E>::get_by_key(&self.repository, key.clone()).await;
        settle(
            E::NAME,
            "get",
            row.map(|row| row.ok_or_else(|| not_found::<E>(&key))),
        )
    }

    /// Insert an entity, returning it with its generated id where applicable.
    pub async fn insert<E: Entity>(&self, entity: E) -> Outcome<E>
    where
        R: CrudRepository<E>,
    {
        let inserted = CrudRepository::<E>::insert(&self.repository, entity).await;
        settle(E::NAME, "insert", inserted.map(Ok))
    }

    /// Update an entity by key; zero rows affected is a failure.
    pub async fn update<E: Entity>(&self, entity: E) -> Outcome<E>
    where
        R: CrudRepository<E>,
    {
        let key = entity.key();
        let updated = CrudRepository::<E>::update(&self.repository, entity).await;
        settle(
            E::NAME,
            "update",
            updated.map(|row| row.ok_or_else(|| not_found::<E>(&key))),
        )
    }

    /// Delete an entity by key; zero rows affected is a failure.
    pub async fn delete<E: Entity>(&self, key: E::Key) -> Outcome<bool>
    where
        R: CrudRepository<E>,
    {
        let deleted = CrudRepository::<E>::delete(&self.repository, key.clone()).await;
        settle(
            E::NAME,
            "delete",
            deleted.map(|deleted| deleted.then_some(true).ok_or_else(|| not_found::<E>(&key))),
        )
    }

    /// Delete an entity by its own key.
    pub async fn delete_entity<E: Entity>(&self, entity: &E) -> Outcome<bool>
    where
        R: CrudRepository<E>,
    {
        self.delete::<E>(entity.key()).await
    }

    /// Fetch every row of a view.
    pub async fn list_view<V: View>(&self) -> Outcome<Vec<V>>
    where
        R: ViewRepository<V>,
    {
        let rows = ViewRepository::<V>::list_all(&self.repository).await;
        settle(V::NAME, "list", rows.map(Ok))
    }

    /// Fetch one view row by key.
    pub async fn get_view<V: View>(&self, key: V::Key) -> Outcome<V>
    where
        R: ViewRepository<V>,
    {
        let row = ViewRepository::<V>::get_by_key(&self.repository, key.clone()).await;
        settle(
            V::NAME,
            "get",
            row.map(|row| {
                row.ok_or_else(|| Rejection::NotFound {
                    entity: V::NAME,
                    key: format!("key {key}"),
                })
            }),
        )
    }

    /// Always rejected: views are read-only.
    pub async fn insert_view<V: View>(&self, _row: V) -> Outcome<V> {
        read_only::<V, V>("Insert")
    }

    /// Always rejected: views are read-only.
    pub async fn update_view<V: View>(&self, _row: V) -> Outcome<V> {
        read_only::<V, V>("Update")
    }

    /// Always rejected: views are read-only.
    pub async fn delete_view<V: View>(&self, _key: V::Key) -> Outcome<bool> {
        read_only::<V, bool>("Delete")
    }
}

fn not_found<E: Entity>(key: &E::Key) -> Rejection {
    Rejection::NotFound {
        entity: E::NAME,
        key: E::describe_key(key),
    }
}

fn read_only<V: View, T>(operation: &'static str) -> Outcome<T> {
    let rejection = Rejection::ReadOnlyView {
        view: V::NAME,
        operation,
    };
    event!(Level::DEBUG, view = V::NAME, operation, "rejected mutation");
    Outcome::failure(rejection.to_string())
}

/// Fold the two failure layers into one envelope.
fn settle<T, E: std::error::Error>(
    subject: &'static str,
    operation: &'static str,
    result: Result<Result<T, Rejection>, E>,
) -> Outcome<T> {
    match result {
        Ok(Ok(data)) => Outcome::Success(data),
        Ok(Err(rejection)) => {
            event!(Level::DEBUG, subject, operation, rejection = %rejection);
            Outcome::failure(rejection.to_string())
        }
        Err(err) => {
            event!(Level::ERROR, subject, operation, err = err.to_string());
            Outcome::failure(err.to_string())
        }
    }
}
