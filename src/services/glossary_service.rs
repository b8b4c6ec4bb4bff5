// src/services/glossary_service.rs
//
// Glossary Service - Terminology Management
//
// CRITICAL RULES:
// - Terms belong to exactly one existing book
// - Deleting a term cascades to nothing

use std::sync::Arc;

use crate::domain::{validate_glossary_term, GlossaryTerm};
use crate::error::{AppError, AppResult};
use crate::repositories::{BookRepository, GlossaryRepository};

/// Request to create a new glossary term
#[derive(Debug, Clone)]
pub struct CreateTermRequest {
    pub original: String,
    pub translation: String,
    pub book_id: String,
}

pub struct GlossaryService {
    glossary_repo: Arc<dyn GlossaryRepository>,
    book_repo: Arc<dyn BookRepository>,
}

impl GlossaryService {
    pub fn new(glossary_repo: Arc<dyn GlossaryRepository>, book_repo: Arc<dyn BookRepository>) -> Self {
        Self {
            glossary_repo,
            book_repo,
        }
    }

    /// Create a new term
    pub fn create_term(&self, request: CreateTermRequest) -> AppResult<GlossaryTerm> {
        if !self.book_repo.exists(&request.book_id)? {
            return Err(AppError::NotFound);
        }

        let term = GlossaryTerm::new(request.original, request.translation, request.book_id);
        validate_glossary_term(&term)?;

        self.glossary_repo.insert(&term)?;

        Ok(term)
    }

    /// Replace an existing term record
    pub fn update_term(&self, term: GlossaryTerm) -> AppResult<GlossaryTerm> {
        validate_glossary_term(&term)?;
        self.glossary_repo.update(&term)?;
        Ok(term)
    }

    pub fn delete_term(&self, id: &str) -> AppResult<()> {
        self.glossary_repo.delete(id)
    }

    /// All terms, collated by source term
    pub fn list_terms(&self) -> AppResult<Vec<GlossaryTerm>> {
        self.glossary_repo.list_all()
    }

    /// One book's terms, collated by source term
    pub fn list_terms_for_book(&self, book_id: &str) -> AppResult<Vec<GlossaryTerm>> {
        self.glossary_repo.list_for_book(book_id)
    }
}
