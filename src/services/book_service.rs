// src/services/book_service.rs
//
// Book Service - Library Management
//
// CRITICAL RULES:
// - Deleting a book cascades to its chapters and glossary terms ONLY
// - Characters and relations are global and never touched here
// - Updates address an existing id; a missing id is an explicit NotFound

use std::sync::Arc;

use crate::domain::{validate_book, Book};
use crate::error::{AppError, AppResult};
use crate::events::{BookCreated, BookDeleted, EventBus};
use crate::repositories::{BookRepository, ChapterRepository, GlossaryRepository};

/// Request to create a new book
#[derive(Debug, Clone)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub genre: String,
}

pub struct BookService {
    book_repo: Arc<dyn BookRepository>,
    chapter_repo: Arc<dyn ChapterRepository>,
    glossary_repo: Arc<dyn GlossaryRepository>,
    event_bus: EventBus,
}

impl BookService {
    pub fn new(
        book_repo: Arc<dyn BookRepository>,
        chapter_repo: Arc<dyn ChapterRepository>,
        glossary_repo: Arc<dyn GlossaryRepository>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            book_repo,
            chapter_repo,
            glossary_repo,
            event_bus,
        }
    }

    /// Create a new book
    ///
    /// Generates the id and a placeholder cover reference.
    pub fn create_book(&self, request: CreateBookRequest) -> AppResult<Book> {
        // 1. Create domain entity
        let book = Book::new(request.title, request.author, request.genre);

        // 2. Validate domain invariants
        validate_book(&book)?;

        // 3. Persist
        self.book_repo.insert(&book)?;

        // 4. Emit event
        self.event_bus
            .emit(BookCreated::new(book.id.clone(), book.title.clone()));

        Ok(book)
    }

    /// Replace an existing book record
    pub fn update_book(&self, book: Book) -> AppResult<Book> {
        validate_book(&book)?;
        self.book_repo.update(&book)?;
        Ok(book)
    }

    /// Delete a book and everything it owns
    pub fn delete_book(&self, id: &str) -> AppResult<()> {
        if !self.book_repo.exists(id)? {
            return Err(AppError::NotFound);
        }

        let chapters_removed = self.chapter_repo.delete_for_book(id)?;
        let terms_removed = self.glossary_repo.delete_for_book(id)?;
        self.book_repo.delete(id)?;

        self.event_bus.emit(BookDeleted::new(
            id.to_string(),
            chapters_removed,
            terms_removed,
        ));

        Ok(())
    }

    pub fn get_book(&self, id: &str) -> AppResult<Option<Book>> {
        self.book_repo.get_by_id(id)
    }

    pub fn list_books(&self) -> AppResult<Vec<Book>> {
        self.book_repo.list_all()
    }
}
