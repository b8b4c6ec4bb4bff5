// src/repositories/glossary_repository.rs
//
// Glossary persistence
//
// Listings are sorted by `original` under locale collation on every read;
// the stored collection stays in insertion order.

use std::cmp::Ordering;
use std::sync::{Arc, OnceLock};

use icu::collator::{Collator, CollatorOptions, Strength};
use icu::locid::locale;
use log::warn;

use crate::db::DataStore;
use crate::domain::GlossaryTerm;
use crate::error::{AppError, AppResult};

pub trait GlossaryRepository: Send + Sync {
    fn insert(&self, term: &GlossaryTerm) -> AppResult<()>;
    fn update(&self, term: &GlossaryTerm) -> AppResult<()>;
    fn list_all(&self) -> AppResult<Vec<GlossaryTerm>>;
    fn list_for_book(&self, book_id: &str) -> AppResult<Vec<GlossaryTerm>>;
    fn delete(&self, id: &str) -> AppResult<()>;

    /// Remove every term of a book; returns the number removed
    fn delete_for_book(&self, book_id: &str) -> AppResult<usize>;
}

/// Compare two source-language terms under the collation used for listings
///
/// Uses the Vietnamese locale tailoring; Han characters carry their implicit
/// (code point) weights. Falls back to plain code point order if collation
/// data cannot be loaded.
pub fn compare_originals(a: &str, b: &str) -> Ordering {
    match collator() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

fn collator() -> Option<&'static Collator> {
    static COLLATOR: OnceLock<Option<Collator>> = OnceLock::new();
    COLLATOR
        .get_or_init(|| {
            let mut options = CollatorOptions::new();
            options.strength = Some(Strength::Tertiary);
            match Collator::try_new(&locale!("vi").into(), options) {
                Ok(collator) => Some(collator),
                Err(e) => {
                    warn!("Collator unavailable, falling back to code point order: {}", e);
                    None
                }
            }
        })
        .as_ref()
}

pub struct StoreGlossaryRepository {
    store: Arc<DataStore>,
}

impl StoreGlossaryRepository {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    fn sorted(mut terms: Vec<GlossaryTerm>) -> Vec<GlossaryTerm> {
        terms.sort_by(|a, b| compare_originals(&a.original, &b.original));
        terms
    }
}

impl GlossaryRepository for StoreGlossaryRepository {
    fn insert(&self, term: &GlossaryTerm) -> AppResult<()> {
        self.store.mutate(|d| d.glossary.push(term.clone()));
        Ok(())
    }

    fn update(&self, term: &GlossaryTerm) -> AppResult<()> {
        self.store.try_mutate(|d| {
            let slot = d
                .glossary
                .iter_mut()
                .find(|t| t.id == term.id)
                .ok_or(AppError::NotFound)?;
            *slot = term.clone();
            Ok(())
        })
    }

    fn list_all(&self) -> AppResult<Vec<GlossaryTerm>> {
        Ok(Self::sorted(self.store.read(|d| d.glossary.clone())))
    }

    fn list_for_book(&self, book_id: &str) -> AppResult<Vec<GlossaryTerm>> {
        Ok(Self::sorted(self.store.read(|d| {
            d.glossary
                .iter()
                .filter(|t| t.book_id == book_id)
                .cloned()
                .collect()
        })))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.store.try_mutate(|d| {
            let before = d.glossary.len();
            d.glossary.retain(|t| t.id != id);

            if d.glossary.len() == before {
                return Err(AppError::NotFound);
            }

            Ok(())
        })
    }

    fn delete_for_book(&self, book_id: &str) -> AppResult<usize> {
        Ok(self.store.mutate(|d| {
            let before = d.glossary.len();
            d.glossary.retain(|t| t.book_id != book_id);
            before - d.glossary.len()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DataStore, Dataset, MemorySnapshotStore, SnapshotStore};
    use crate::events::create_event_bus;

    fn repo() -> StoreGlossaryRepository {
        let store = DataStore::open(Arc::new(MemorySnapshotStore::new()), create_event_bus());
        StoreGlossaryRepository::new(Arc::new(store))
    }

    fn repo_with(terms: Vec<GlossaryTerm>) -> StoreGlossaryRepository {
        let snapshots = MemorySnapshotStore::new();
        snapshots
            .save(&Dataset {
                glossary: terms,
                ..Dataset::default()
            })
            .unwrap();
        let store = DataStore::open(Arc::new(snapshots), create_event_bus());
        StoreGlossaryRepository::new(Arc::new(store))
    }

    #[test]
    fn test_listing_is_collated_regardless_of_insertion_order() {
        // Inserted 魔兽 first; 斗气 still lists before it
        let repo = repo_with(vec![
            GlossaryTerm::new("魔兽".to_string(), "Ma Thú".to_string(), "1".to_string()),
            GlossaryTerm::new("斗气".to_string(), "Đấu Khí".to_string(), "1".to_string()),
        ]);

        let originals: Vec<String> = repo
            .list_all()
            .unwrap()
            .into_iter()
            .map(|t| t.original)
            .collect();
        assert_eq!(originals, vec!["斗气".to_string(), "魔兽".to_string()]);
    }

    #[test]
    fn test_sample_glossary_order_for_book() {
        let repo = repo();
        let originals: Vec<String> = repo
            .list_for_book("1")
            .unwrap()
            .into_iter()
            .map(|t| t.original)
            .collect();
        // Han characters collate by implicit weight: 斗 < 炼 < 魂 < 魔
        assert_eq!(
            originals,
            vec![
                "斗气".to_string(),
                "炼药师".to_string(),
                "魂殿".to_string(),
                "魔兽".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_for_book_filters_other_books() {
        let repo = repo();
        let terms = repo.list_for_book("2").unwrap();
        assert_eq!(terms.len(), 2);
        assert!(terms.iter().all(|t| t.book_id == "2"));
    }

    #[test]
    fn test_vietnamese_terms_collate_with_diacritics() {
        let repo = repo_with(vec![
            GlossaryTerm::new("đan dược".to_string(), "đan dược".to_string(), "1".to_string()),
            GlossaryTerm::new("bí cảnh".to_string(), "bí cảnh".to_string(), "1".to_string()),
        ]);

        let originals: Vec<String> = repo
            .list_all()
            .unwrap()
            .into_iter()
            .map(|t| t.original)
            .collect();
        // In vi collation đ sorts after d (and after b), unlike raw code points
        assert_eq!(originals, vec!["bí cảnh".to_string(), "đan dược".to_string()]);
    }

    #[test]
    fn test_delete_for_book_leaves_other_books() {
        let repo = repo();
        assert_eq!(repo.delete_for_book("1").unwrap(), 4);
        assert_eq!(repo.list_all().unwrap().len(), 3);
    }
}
