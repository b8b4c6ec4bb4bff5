// src/lib.rs
// NovelHub - Local-first novel translation manager
//
// Architecture:
// - Domain-centric: entities and invariants live in domain/
// - Whole-snapshot persistence: the dataset is one JSON document in SQLite
// - Event-driven boundary: services report facts, the shell subscribes
// - Explicit: no implicit behavior, no magic
// - Local-first: user controls all data; the only network call is the
//   streaming translation request

// ============================================================================
// CORE MODULES
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    placeholder_cover,
    validate_book,
    validate_chapter,
    validate_character,
    validate_glossary_term,
    validate_relation,
    // Book
    Book,
    // Chapter
    Chapter,
    // Character
    Character,
    // Relation
    CharacterRelation,
    DomainError,
    DomainResult,
    // Glossary
    GlossaryTerm,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    BookCreated,
    BookDeleted,
    CharacterDeleted,
    DomainEvent,
    EventBus,
    EventLogEntry,
    SnapshotPersistFailed,
    TranslationCompleted,
};

// ============================================================================
// PUBLIC API - Persistence
// ============================================================================

pub use db::{
    create_connection_pool, create_connection_pool_at, sample_dataset, ConnectionPool, DataStore,
    Dataset, MemorySnapshotStore, SnapshotStore, SqliteSnapshotStore, SNAPSHOT_KEY,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    BookRepository,
    ChapterRepository,
    CharacterRepository,
    GlossaryRepository,
    RelationRepository,
    StoreBookRepository,
    StoreChapterRepository,
    StoreCharacterRepository,
    StoreGlossaryRepository,
    StoreRelationRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    BookService,
    ChapterService,
    CharacterService,
    CreateBookRequest,
    CreateChapterRequest,
    CreateCharacterRequest,
    CreateRelationRequest,
    CreateTermRequest,
    GlossaryService,
    TranslateRequest,
    TranslationService,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{CancelToken, GeminiClient, GenerationClient, StreamOutcome};
