use crate::models::Entity;

/// Repository interface for one mutable entity.
///
/// Each call is a single, self-contained request against storage: no state is
/// kept between calls, and a keyed read that hydrates related rows does so
/// with dependent queries on the same connection but without a transaction.
pub trait CrudRepository<E: Entity>: super::Repository {
    /// Fetch every row, ordered by the entity's natural key, with immediate
    /// parents joined in where the entity has any.
    fn list_all(&self) -> impl Future<Output = Result<Vec<E>, Self::Error>> + Send;

    /// Fetch one row by primary key, hydrating its related rows.
    ///
    /// # Returns
    ///
    /// Ok(None) if no row has this key.
    fn get_by_key(
        &self,
        key: E::Key,
    ) -> impl Future<Output = Result<Option<E>, Self::Error>> + Send;

    /// Insert a row. Absent optional values are stored as NULL.
    ///
    /// For integer-identity tables the generated id is assigned onto the
    /// returned entity; otherwise the caller-supplied key is kept.
    fn insert(&self, entity: E) -> impl Future<Output = Result<E, Self::Error>> + Send;

    /// Overwrite every non-key column of the row with the entity's key.
    ///
    /// # Returns
    ///
    /// - Ok(Some(entity)) if a row was updated
    /// - Ok(None) if no row has this key
    fn update(&self, entity: E) -> impl Future<Output = Result<Option<E>, Self::Error>> + Send;

    /// Delete the row with this key.
    ///
    /// # Returns
    ///
    /// - Ok(true) if a row was deleted
    /// - Ok(false) if no row has this key
    fn delete(&self, key: E::Key) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
