// src/repositories/book_repository.rs
//
// Book persistence

use std::sync::Arc;

use crate::db::DataStore;
use crate::domain::Book;
use crate::error::{AppError, AppResult};

pub trait BookRepository: Send + Sync {
    fn insert(&self, book: &Book) -> AppResult<()>;
    fn update(&self, book: &Book) -> AppResult<()>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Book>>;
    fn list_all(&self) -> AppResult<Vec<Book>>;
    fn delete(&self, id: &str) -> AppResult<()>;
    fn exists(&self, id: &str) -> AppResult<bool>;
}

pub struct StoreBookRepository {
    store: Arc<DataStore>,
}

impl StoreBookRepository {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

impl BookRepository for StoreBookRepository {
    fn insert(&self, book: &Book) -> AppResult<()> {
        self.store.mutate(|d| d.books.push(book.clone()));
        Ok(())
    }

    fn update(&self, book: &Book) -> AppResult<()> {
        self.store.try_mutate(|d| {
            let slot = d
                .books
                .iter_mut()
                .find(|b| b.id == book.id)
                .ok_or(AppError::NotFound)?;
            *slot = book.clone();
            Ok(())
        })
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        Ok(self.store.read(|d| d.books.iter().find(|b| b.id == id).cloned()))
    }

    fn list_all(&self) -> AppResult<Vec<Book>> {
        // Insertion order; callers get owned copies
        Ok(self.store.read(|d| d.books.clone()))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.store.try_mutate(|d| {
            let before = d.books.len();
            d.books.retain(|b| b.id != id);

            if d.books.len() == before {
                return Err(AppError::NotFound);
            }

            Ok(())
        })
    }

    fn exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.store.read(|d| d.books.iter().any(|b| b.id == id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DataStore, MemorySnapshotStore};
    use crate::events::create_event_bus;

    fn repo() -> StoreBookRepository {
        let store = DataStore::open(Arc::new(MemorySnapshotStore::new()), create_event_bus());
        StoreBookRepository::new(Arc::new(store))
    }

    #[test]
    fn test_insert_appends_in_order() {
        let repo = repo();
        let book = Book::new("A".to_string(), "B".to_string(), "C".to_string());
        repo.insert(&book).unwrap();

        let books = repo.list_all().unwrap();
        assert_eq!(books.len(), 5);
        assert_eq!(books.last().unwrap().id, book.id);
    }

    #[test]
    fn test_get_by_id_finds_inserted_book() {
        let repo = repo();
        let book = Book::new("A".to_string(), "B".to_string(), "C".to_string());
        repo.insert(&book).unwrap();

        assert_eq!(repo.get_by_id(&book.id).unwrap().unwrap(), book);
        assert!(repo.get_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let repo = repo();
        let mut book = repo.get_by_id("1").unwrap().unwrap();
        book.genre = "Huyền Huyễn".to_string();

        repo.update(&book).unwrap();
        assert_eq!(repo.get_by_id("1").unwrap().unwrap().genre, "Huyền Huyễn");
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let repo = repo();
        let book = Book::new("A".to_string(), "B".to_string(), "C".to_string());
        assert!(matches!(repo.update(&book), Err(AppError::NotFound)));
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let repo = repo();
        assert!(matches!(repo.delete("missing"), Err(AppError::NotFound)));
    }

    #[test]
    fn test_returned_records_are_copies() {
        let repo = repo();
        let mut books = repo.list_all().unwrap();
        books[0].title = "mutated".to_string();

        // Mutating the returned vector does not touch shared state
        assert_eq!(
            repo.get_by_id("1").unwrap().unwrap().title,
            "Đấu Phá Thương Khung"
        );
    }
}
