use async_trait::async_trait;

use bookrack_store::{StoreError, TableClient};

use super::models::Book;
use super::repository::BookRepository;

/// Attribute name of the table's partition key.
const KEY_NAME: &str = "ISBN";

/// Book repository backed by the managed DynamoDB table.
pub struct DynamoBookRepository {
    table: TableClient,
}

impl DynamoBookRepository {
    pub fn new(table: TableClient) -> Self {
        Self { table }
    }
}

#[async_trait]
impl BookRepository for DynamoBookRepository {
    async fn put(&self, book: &Book) -> Result<(), StoreError> {
        self.table.put_item(book).await
    }

    async fn get(&self, isbn: &str) -> Result<Option<Book>, StoreError> {
        self.table.get_item(KEY_NAME, isbn).await
    }

    async fn delete(&self, isbn: &str) -> Result<(), StoreError> {
        self.table.delete_item(KEY_NAME, isbn).await
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        self.table.scan_all().await
    }
}
