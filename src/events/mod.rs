// src/events/mod.rs
//
// Events Module - facts emitted by the core, observed by the shell

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventLogEntry};
pub use types::{
    BookCreated,
    BookDeleted,
    CharacterDeleted,
    DomainEvent,
    SnapshotPersistFailed,
    TranslationCompleted,
};

/// Create a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
