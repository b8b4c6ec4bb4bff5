// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - NO cross-repository calls
// - Linear scans over the shared dataset, owned copies out

pub mod book_repository;
pub mod chapter_repository;
pub mod character_repository;
pub mod glossary_repository;
pub mod relation_repository;

pub use book_repository::{BookRepository, StoreBookRepository};
pub use chapter_repository::{ChapterRepository, StoreChapterRepository};
pub use character_repository::{CharacterRepository, StoreCharacterRepository};
pub use glossary_repository::{compare_originals, GlossaryRepository, StoreGlossaryRepository};
pub use relation_repository::{RelationRepository, StoreRelationRepository};
