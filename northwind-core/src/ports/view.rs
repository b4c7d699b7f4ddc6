use crate::models::View;

/// Repository interface for a read-only reporting view.
///
/// Views have no mutating methods at this level; the gateway rejects
/// mutations before they could reach storage.
pub trait ViewRepository<V: View>: super::Repository {
    /// Fetch every row of the view.
    fn list_all(&self) -> impl Future<Output = Result<Vec<V>, Self::Error>> + Send;

    /// Fetch the row identified by `key`, if present.
    fn get_by_key(
        &self,
        key: V::Key,
    ) -> impl Future<Output = Result<Option<V>, Self::Error>> + Send;
}
