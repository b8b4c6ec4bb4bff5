// src/domain/glossary_term.rs
//
// Glossary Term Entity
//
// A fixed translation mapping for a recurring term, scoped to one book.
// Listings are always presented in locale-collated order of `original`;
// that ordering is applied by the repository on read, never stored.

use serde::{Deserialize, Serialize};

use crate::domain::ids;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    /// Internal immutable identifier
    pub id: String,

    /// Source-language term
    pub original: String,

    /// Fixed target-language rendering
    pub translation: String,

    /// Owning book
    #[serde(rename = "bookId")]
    pub book_id: String,
}

impl GlossaryTerm {
    /// Create a new GlossaryTerm entity
    pub fn new(original: String, translation: String, book_id: String) -> Self {
        Self {
            id: ids::new_id(),
            original,
            translation,
            book_id,
        }
    }
}

/// Validates GlossaryTerm invariants
pub fn validate_glossary_term(term: &GlossaryTerm) -> DomainResult<()> {
    if term.original.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Glossary term original cannot be empty".to_string(),
        ));
    }

    if term.translation.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Glossary term translation cannot be empty".to_string(),
        ));
    }

    if term.book_id.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Glossary term must belong to a book".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_term() {
        let term = GlossaryTerm::new("斗气".to_string(), "Đấu Khí".to_string(), "1".to_string());
        assert!(validate_glossary_term(&term).is_ok());
    }

    #[test]
    fn test_empty_fields_fail() {
        let term = GlossaryTerm::new(String::new(), "Đấu Khí".to_string(), "1".to_string());
        assert!(validate_glossary_term(&term).is_err());

        let term = GlossaryTerm::new("斗气".to_string(), " ".to_string(), "1".to_string());
        assert!(validate_glossary_term(&term).is_err());

        let term = GlossaryTerm::new("斗气".to_string(), "Đấu Khí".to_string(), String::new());
        assert!(validate_glossary_term(&term).is_err());
    }
}
