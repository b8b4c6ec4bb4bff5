// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod book_service;
pub mod chapter_service;
pub mod character_service;
pub mod glossary_service;
pub mod prompt_builder;
pub mod translation_service;

#[cfg(test)]
mod character_service_tests;

// Re-export all services and their types
pub use book_service::{BookService, CreateBookRequest};

pub use chapter_service::{ChapterService, CreateChapterRequest};

pub use character_service::{
    CharacterService,
    CreateCharacterRequest,
    CreateRelationRequest,
};

pub use glossary_service::{CreateTermRequest, GlossaryService};

pub use prompt_builder::{
    build_translation_prompt, character_block, glossary_block, relation_block,
};

pub use translation_service::{TranslateRequest, TranslationService};
