use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookrack_store::StoreError;

use super::models::Book;
use super::repository::BookRepository;

/// In-memory table emulation with the same per-key semantics as the managed
/// table: full overwrite on put, idempotent delete, unordered listing.
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<HashMap<String, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn put(&self, book: &Book) -> Result<(), StoreError> {
        self.books
            .write()
            .await
            .insert(book.isbn.clone(), book.clone());
        Ok(())
    }

    async fn get(&self, isbn: &str) -> Result<Option<Book>, StoreError> {
        Ok(self.books.read().await.get(isbn).cloned())
    }

    async fn delete(&self, isbn: &str) -> Result<(), StoreError> {
        self.books.write().await.remove(isbn);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.books.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book(isbn: &str, title: &str) -> Book {
        Book {
            isbn: isbn.to_string(),
            author: "Octavia E. Butler".to_string(),
            title: title.to_string(),
            description: "First of the Parable novels".to_string(),
            publication_date: "1993-10-01".parse().unwrap(),
            available: true,
        }
    }

    #[tokio::test]
    async fn test_get_returns_stored_record() {
        let repo = InMemoryBookRepository::new();
        let book = sample_book("isbn-1", "Parable of the Sower");

        repo.put(&book).await.unwrap();
        assert_eq!(repo.get("isbn-1").await.unwrap(), Some(book));
        assert_eq!(repo.get("isbn-2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites_in_full() {
        let repo = InMemoryBookRepository::new();
        repo.put(&sample_book("isbn-1", "First title")).await.unwrap();

        let replacement = Book {
            available: false,
            ..sample_book("isbn-1", "Second title")
        };
        repo.put(&replacement).await.unwrap();

        assert_eq!(repo.get("isbn-1").await.unwrap(), Some(replacement));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = InMemoryBookRepository::new();
        repo.put(&sample_book("isbn-1", "Kindred")).await.unwrap();

        repo.delete("isbn-1").await.unwrap();
        assert_eq!(repo.get("isbn-1").await.unwrap(), None);

        // Deleting an absent key is not an error.
        repo.delete("isbn-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_list_returns_every_record() {
        let repo = InMemoryBookRepository::new();
        repo.put(&sample_book("isbn-1", "Dawn")).await.unwrap();
        repo.put(&sample_book("isbn-2", "Adulthood Rites")).await.unwrap();

        let mut isbns: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.isbn)
            .collect();
        isbns.sort();
        assert_eq!(isbns, vec!["isbn-1", "isbn-2"]);
    }
}
