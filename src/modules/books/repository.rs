use async_trait::async_trait;

use bookrack_store::StoreError;

use super::models::Book;

/// Storage seam for book records. The production implementation talks to the
/// managed table; the in-memory one backs the integration tests.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Store a record, fully overwriting any record under the same ISBN
    async fn put(&self, book: &Book) -> Result<(), StoreError>;

    /// Fetch the record with the given ISBN, if any
    async fn get(&self, isbn: &str) -> Result<Option<Book>, StoreError>;

    /// Remove the record with the given ISBN
    async fn delete(&self, isbn: &str) -> Result<(), StoreError>;

    /// Retrieve all records, unordered
    async fn list(&self) -> Result<Vec<Book>, StoreError>;
}
