// src/domain/ids.rs
//
// Identifier generation
//
// Every entity id is an opaque, immutable string. Ids loaded from an existing
// snapshot may be arbitrary strings (the seed data uses short ids like "c1"),
// so ids are never parsed back into UUIDs.

use uuid::Uuid;

/// Generate a fresh opaque identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
