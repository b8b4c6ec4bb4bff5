// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// LIBRARY EVENTS
// ============================================================================

/// Emitted when a new book is added to the library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_id: String,
    pub title: String,
}

impl BookCreated {
    pub fn new(book_id: String, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_id,
            title,
        }
    }
}

impl DomainEvent for BookCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "BookCreated" }
}

/// Emitted when a book is removed together with its owned records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_id: String,
    pub chapters_removed: usize,
    pub terms_removed: usize,
}

impl BookDeleted {
    pub fn new(book_id: String, chapters_removed: usize, terms_removed: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_id,
            chapters_removed,
            terms_removed,
        }
    }
}

impl DomainEvent for BookDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "BookDeleted" }
}

/// Emitted when a character is removed together with its relations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub character_id: String,
    pub relations_removed: usize,
}

impl CharacterDeleted {
    pub fn new(character_id: String, relations_removed: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            character_id,
            relations_removed,
        }
    }
}

impl DomainEvent for CharacterDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CharacterDeleted" }
}

// ============================================================================
// PERSISTENCE EVENTS
// ============================================================================

/// Emitted when writing the dataset snapshot to durable storage fails
///
/// The in-memory dataset stays authoritative for the session; this event is
/// the only signal that durable state has diverged from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotPersistFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub reason: String,
}

impl SnapshotPersistFailed {
    pub fn new(reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            reason,
        }
    }
}

impl DomainEvent for SnapshotPersistFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SnapshotPersistFailed" }
}

// ============================================================================
// TRANSLATION EVENTS
// ============================================================================

/// Emitted when a streaming translation runs to normal completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_id: String,
    pub fragments: usize,
    pub output_chars: usize,
}

impl TranslationCompleted {
    pub fn new(book_id: String, fragments: usize, output_chars: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_id,
            fragments,
            output_chars,
        }
    }
}

impl DomainEvent for TranslationCompleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TranslationCompleted" }
}
