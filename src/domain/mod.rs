// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod book;
pub mod chapter;
pub mod character;
pub mod character_relation;
pub mod glossary_term;
pub mod ids;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Book Domain
pub use book::{placeholder_cover, validate_book, Book};

// Chapter Domain
pub use chapter::{validate_chapter, Chapter};

// Character Domain
pub use character::{validate_character, Character};

// Character Relation
pub use character_relation::{validate_relation, CharacterRelation};

// Glossary
pub use glossary_term::{validate_glossary_term, GlossaryTerm};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("A character cannot have a relation with itself")]
    SelfReferentialRelation,

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
