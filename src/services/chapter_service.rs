// src/services/chapter_service.rs
//
// Chapter Service - Chapter Management
//
// CRITICAL RULES:
// - A chapter is only created under an existing book
// - The translated text is part of the chapter record; saving a translation
//   is a whole-record update, not a patch

use std::sync::Arc;

use crate::domain::{validate_chapter, Chapter};
use crate::error::{AppError, AppResult};
use crate::repositories::{BookRepository, ChapterRepository};

/// Request to create a new chapter
#[derive(Debug, Clone)]
pub struct CreateChapterRequest {
    pub book_id: String,
    pub title: String,
    pub original_content: String,
    /// Translation carried over from the editor, if any
    pub translated_content: Option<String>,
}

pub struct ChapterService {
    chapter_repo: Arc<dyn ChapterRepository>,
    book_repo: Arc<dyn BookRepository>,
}

impl ChapterService {
    pub fn new(chapter_repo: Arc<dyn ChapterRepository>, book_repo: Arc<dyn BookRepository>) -> Self {
        Self {
            chapter_repo,
            book_repo,
        }
    }

    /// Create a new chapter
    ///
    /// CRITICAL: book_id MUST exist (validated)
    pub fn create_chapter(&self, request: CreateChapterRequest) -> AppResult<Chapter> {
        // 1. Validate book exists
        if !self.book_repo.exists(&request.book_id)? {
            return Err(AppError::NotFound);
        }

        // 2. Create domain entity
        let mut chapter = Chapter::new(request.book_id, request.title, request.original_content);
        if let Some(translated) = request.translated_content {
            chapter.translated_content = translated;
        }

        // 3. Validate domain invariants
        validate_chapter(&chapter)?;

        // 4. Persist
        self.chapter_repo.insert(&chapter)?;

        Ok(chapter)
    }

    /// Replace an existing chapter record
    pub fn update_chapter(&self, chapter: Chapter) -> AppResult<Chapter> {
        validate_chapter(&chapter)?;
        self.chapter_repo.update(&chapter)?;
        Ok(chapter)
    }

    pub fn delete_chapter(&self, id: &str) -> AppResult<()> {
        self.chapter_repo.delete(id)
    }

    pub fn get_chapter(&self, book_id: &str, chapter_id: &str) -> AppResult<Option<Chapter>> {
        self.chapter_repo.get(book_id, chapter_id)
    }

    pub fn list_chapters(&self, book_id: &str) -> AppResult<Vec<Chapter>> {
        self.chapter_repo.list_for_book(book_id)
    }
}
