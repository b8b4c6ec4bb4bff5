// src/services/character_service.rs
//
// Character Service - Cast and Address Relations
//
// CRITICAL RULES:
// - Characters and relations are global, never book-scoped
// - A character cannot address itself; this is checked here, BEFORE the
//   repository, which does not re-validate
// - Deleting a character cascades to every relation referencing it

use std::sync::Arc;

use crate::domain::{
    validate_character, validate_relation, Character, CharacterRelation,
};
use crate::error::{AppError, AppResult};
use crate::events::{CharacterDeleted, EventBus};
use crate::repositories::{CharacterRepository, RelationRepository};

/// Request to create a new character
#[derive(Debug, Clone)]
pub struct CreateCharacterRequest {
    pub name_cn: String,
    pub name_vi: String,
    pub alias: String,
    pub notes: Option<String>,
    pub address_3rd: Option<String>,
}

/// Request to create a new directed address relation
#[derive(Debug, Clone)]
pub struct CreateRelationRequest {
    pub from: String,
    pub to: String,
    pub address: String,
}

pub struct CharacterService {
    character_repo: Arc<dyn CharacterRepository>,
    relation_repo: Arc<dyn RelationRepository>,
    event_bus: EventBus,
}

impl CharacterService {
    pub fn new(
        character_repo: Arc<dyn CharacterRepository>,
        relation_repo: Arc<dyn RelationRepository>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            character_repo,
            relation_repo,
            event_bus,
        }
    }

    /// Create a new character
    pub fn create_character(&self, request: CreateCharacterRequest) -> AppResult<Character> {
        let mut character = Character::new(request.name_cn, request.name_vi, request.alias);
        character.notes = request.notes;
        character.address_3rd = request.address_3rd;

        validate_character(&character)?;

        self.character_repo.insert(&character)?;

        Ok(character)
    }

    /// Replace an existing character record
    pub fn update_character(&self, character: Character) -> AppResult<Character> {
        validate_character(&character)?;
        self.character_repo.update(&character)?;
        Ok(character)
    }

    /// Delete a character and every relation referencing it
    pub fn delete_character(&self, id: &str) -> AppResult<()> {
        if !self.character_repo.exists(id)? {
            return Err(AppError::NotFound);
        }

        let relations_removed = self.relation_repo.delete_for_character(id)?;
        self.character_repo.delete(id)?;

        self.event_bus
            .emit(CharacterDeleted::new(id.to_string(), relations_removed));

        Ok(())
    }

    /// Create a directed address relation between two existing characters
    pub fn create_relation(&self, request: CreateRelationRequest) -> AppResult<CharacterRelation> {
        // 1. Self-addressing is rejected at construction
        let relation = CharacterRelation::new(request.from, request.to, request.address)?;

        // 2. Remaining invariants (non-empty address)
        validate_relation(&relation)?;

        // 3. Both endpoints must exist
        if !self.character_repo.exists(&relation.from)?
            || !self.character_repo.exists(&relation.to)?
        {
            return Err(AppError::NotFound);
        }

        // 4. Persist
        self.relation_repo.insert(&relation)?;

        Ok(relation)
    }

    pub fn delete_relation(&self, id: &str) -> AppResult<()> {
        self.relation_repo.delete(id)
    }

    pub fn list_characters(&self) -> AppResult<Vec<Character>> {
        self.character_repo.list_all()
    }

    pub fn list_relations(&self) -> AppResult<Vec<CharacterRelation>> {
        self.relation_repo.list_all()
    }
}
