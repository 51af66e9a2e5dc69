/// CRUD surface over one mapped type
///
/// Implementations report failures through their diagnostics and return a
/// benign result instead: nothing for writes, `None` or an empty `Vec` for
/// reads.
#[async_trait::async_trait]
pub trait Dao<T: Send + Sync + 'static>: Send + Sync {
    /// Store a new row. A row with the same key is left as it was.
    async fn insert(&self, object: &T);

    /// Overwrite the non-key columns of the row sharing `object`'s key
    async fn update(&self, object: &T);

    /// Remove the row matching `key`'s key fields
    async fn delete_by_key(&self, key: &T);

    /// First row matching `key`'s key fields
    async fn select_by_key(&self, key: &T) -> Option<T>;

    async fn select_all(&self) -> Vec<T>;
}
