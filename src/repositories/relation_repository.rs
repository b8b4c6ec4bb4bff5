// src/repositories/relation_repository.rs
//
// Character relation persistence
//
// The repository is a dumb mapper: the self-reference rule is enforced by
// the service (and by CharacterRelation::new) before a record gets here.

use std::sync::Arc;

use crate::db::DataStore;
use crate::domain::CharacterRelation;
use crate::error::{AppError, AppResult};

pub trait RelationRepository: Send + Sync {
    fn insert(&self, relation: &CharacterRelation) -> AppResult<()>;
    fn list_all(&self) -> AppResult<Vec<CharacterRelation>>;
    fn delete(&self, id: &str) -> AppResult<()>;

    /// Remove every relation referencing the character on either side;
    /// returns the number removed
    fn delete_for_character(&self, character_id: &str) -> AppResult<usize>;
}

pub struct StoreRelationRepository {
    store: Arc<DataStore>,
}

impl StoreRelationRepository {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

impl RelationRepository for StoreRelationRepository {
    fn insert(&self, relation: &CharacterRelation) -> AppResult<()> {
        self.store.mutate(|d| d.relations.push(relation.clone()));
        Ok(())
    }

    fn list_all(&self) -> AppResult<Vec<CharacterRelation>> {
        Ok(self.store.read(|d| d.relations.clone()))
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.store.try_mutate(|d| {
            let before = d.relations.len();
            d.relations.retain(|r| r.id != id);

            if d.relations.len() == before {
                return Err(AppError::NotFound);
            }

            Ok(())
        })
    }

    fn delete_for_character(&self, character_id: &str) -> AppResult<usize> {
        Ok(self.store.mutate(|d| {
            let before = d.relations.len();
            d.relations
                .retain(|r| r.from != character_id && r.to != character_id);
            before - d.relations.len()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DataStore, MemorySnapshotStore};
    use crate::events::create_event_bus;

    fn repo() -> StoreRelationRepository {
        let store = DataStore::open(Arc::new(MemorySnapshotStore::new()), create_event_bus());
        StoreRelationRepository::new(Arc::new(store))
    }

    #[test]
    fn test_delete_for_character_matches_either_side() {
        let repo = repo();
        // c1 is `from` in r1 and `to` in r2
        assert_eq!(repo.delete_for_character("c1").unwrap(), 2);
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_for_unreferenced_character_removes_nothing() {
        let repo = repo();
        assert_eq!(repo.delete_for_character("c9").unwrap(), 0);
        assert_eq!(repo.list_all().unwrap().len(), 2);
    }
}
