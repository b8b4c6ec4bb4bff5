// src/repositories/chapter_repository.rs
//
// Chapter persistence - chapters are always addressed within their book

use std::sync::Arc;

use crate::db::DataStore;
use crate::domain::Chapter;
use crate::error::{AppError, AppResult};

pub trait ChapterRepository: Send + Sync {
    fn insert(&self, chapter: &Chapter) -> AppResult<()>;
    fn update(&self, chapter: &Chapter) -> AppResult<()>;
    fn get(&self, book_id: &str, chapter_id: &str) -> AppResult<Option<Chapter>>;
    fn list_for_book(&self, book_id: &str) -> AppResult<Vec<Chapter>>;
    fn delete(&self, id: &str) -> AppResult<()>;

    /// Remove every chapter of a book; returns the number removed
    fn delete_for_book(&self, book_id: &str) -> AppResult<usize>;
}

pub struct StoreChapterRepository {
    store: Arc<DataStore>,
}

impl StoreChapterRepository {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

impl ChapterRepository for StoreChapterRepository {
    fn insert(&self, chapter: &Chapter) -> AppResult<()> {
        self.store.mutate(|d| d.chapters.push(chapter.clone()));
        Ok(())
    }

    fn update(&self, chapter: &Chapter) -> AppResult<()> {
        self.store.try_mutate(|d| {
            let slot = d
                .chapters
                .iter_mut()
                .find(|c| c.id == chapter.id)
                .ok_or(AppError::NotFound)?;
            *slot = chapter.clone();
            Ok(())
        })
    }

    fn get(&self, book_id: &str, chapter_id: &str) -> AppResult<Option<Chapter>> {
        Ok(self.store.read(|d| {
            d.chapters
                .iter()
                .find(|c| c.book_id == book_id && c.id == chapter_id)
                .cloned()
        }))
    }

    fn list_for_book(&self, book_id: &str) -> AppResult<Vec<Chapter>> {
        Ok(self.store.read(|d| {
            d.chapters
                .iter()
                .filter(|c| c.book_id == book_id)
                .cloned()
                .collect()
        }))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.store.try_mutate(|d| {
            let before = d.chapters.len();
            d.chapters.retain(|c| c.id != id);

            if d.chapters.len() == before {
                return Err(AppError::NotFound);
            }

            Ok(())
        })
    }

    fn delete_for_book(&self, book_id: &str) -> AppResult<usize> {
        Ok(self.store.mutate(|d| {
            let before = d.chapters.len();
            d.chapters.retain(|c| c.book_id != book_id);
            before - d.chapters.len()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DataStore, MemorySnapshotStore};
    use crate::events::create_event_bus;

    fn repo() -> StoreChapterRepository {
        let store = DataStore::open(Arc::new(MemorySnapshotStore::new()), create_event_bus());
        StoreChapterRepository::new(Arc::new(store))
    }

    #[test]
    fn test_list_is_scoped_by_book() {
        let repo = repo();
        let chapters = repo.list_for_book("1").unwrap();
        assert_eq!(chapters.len(), 2);
        assert!(repo.list_for_book("2").unwrap().is_empty());
    }

    #[test]
    fn test_get_requires_matching_book() {
        let repo = repo();
        assert!(repo.get("1", "101").unwrap().is_some());
        // Right chapter id, wrong book
        assert!(repo.get("2", "101").unwrap().is_none());
    }

    #[test]
    fn test_delete_for_book_reports_count() {
        let repo = repo();
        assert_eq!(repo.delete_for_book("1").unwrap(), 2);
        assert_eq!(repo.delete_for_book("1").unwrap(), 0);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let repo = repo();
        let chapter = Chapter::new("1".to_string(), "Chương 3".to_string(), String::new());
        assert!(matches!(repo.update(&chapter), Err(AppError::NotFound)));
    }
}
