// src/repositories/character_repository.rs
//
// Character persistence
//
// Characters are global: there is no book scoping on this collection.

use std::sync::Arc;

use crate::db::DataStore;
use crate::domain::Character;
use crate::error::{AppError, AppResult};

pub trait CharacterRepository: Send + Sync {
    fn insert(&self, character: &Character) -> AppResult<()>;
    fn update(&self, character: &Character) -> AppResult<()>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Character>>;
    fn list_all(&self) -> AppResult<Vec<Character>>;
    fn delete(&self, id: &str) -> AppResult<()>;
    fn exists(&self, id: &str) -> AppResult<bool>;
}

pub struct StoreCharacterRepository {
    store: Arc<DataStore>,
}

impl StoreCharacterRepository {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

impl CharacterRepository for StoreCharacterRepository {
    fn insert(&self, character: &Character) -> AppResult<()> {
        self.store.mutate(|d| d.characters.push(character.clone()));
        Ok(())
    }

    fn update(&self, character: &Character) -> AppResult<()> {
        self.store.try_mutate(|d| {
            let slot = d
                .characters
                .iter_mut()
                .find(|c| c.id == character.id)
                .ok_or(AppError::NotFound)?;
            *slot = character.clone();
            Ok(())
        })
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Character>> {
        Ok(self
            .store
            .read(|d| d.characters.iter().find(|c| c.id == id).cloned()))
    }

    fn list_all(&self) -> AppResult<Vec<Character>> {
        Ok(self.store.read(|d| d.characters.clone()))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.store.try_mutate(|d| {
            let before = d.characters.len();
            d.characters.retain(|c| c.id != id);

            if d.characters.len() == before {
                return Err(AppError::NotFound);
            }

            Ok(())
        })
    }

    fn exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.store.read(|d| d.characters.iter().any(|c| c.id == id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DataStore, MemorySnapshotStore};
    use crate::events::create_event_bus;

    fn repo() -> StoreCharacterRepository {
        let store = DataStore::open(Arc::new(MemorySnapshotStore::new()), create_event_bus());
        StoreCharacterRepository::new(Arc::new(store))
    }

    #[test]
    fn test_sample_cast_is_listed() {
        let repo = repo();
        assert_eq!(repo.list_all().unwrap().len(), 3);
        assert!(repo.exists("c1").unwrap());
    }

    #[test]
    fn test_delete_removes_character() {
        let repo = repo();
        repo.delete("c2").unwrap();
        assert!(!repo.exists("c2").unwrap());
        assert!(matches!(repo.delete("c2"), Err(AppError::NotFound)));
    }

    #[test]
    fn test_update_replaces_optional_fields() {
        let repo = repo();
        let mut character = repo.get_by_id("c1").unwrap().unwrap();
        character.notes = None;
        character.address_3rd = Some("hắn".to_string());

        repo.update(&character).unwrap();

        let reloaded = repo.get_by_id("c1").unwrap().unwrap();
        assert!(reloaded.notes.is_none());
        assert_eq!(reloaded.address_3rd.as_deref(), Some("hắn"));
    }
}
