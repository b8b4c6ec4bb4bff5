use serde::{Deserialize, Serialize};

use crate::domain::ids;

/// Represents a novel being translated
/// This is the root entity: chapters and glossary terms belong to a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Internal immutable identifier
    pub id: String,

    /// Title in the target language
    pub title: String,

    /// Author name
    pub author: String,

    /// Genre label (e.g. "Tiên Hiệp", "Huyền Huyễn")
    pub genre: String,

    /// Cover image reference
    #[serde(rename = "coverUrl")]
    pub cover_url: String,
}

impl Book {
    /// Create a new Book entity
    /// This is the only way to construct a valid Book
    ///
    /// The cover reference is synthesized from a fresh id so that every book
    /// gets a distinct placeholder image.
    pub fn new(title: String, author: String, genre: String) -> Self {
        Self {
            id: ids::new_id(),
            title,
            author,
            genre,
            cover_url: placeholder_cover(&ids::new_id()),
        }
    }
}

/// Placeholder cover image reference for a seed value
pub fn placeholder_cover(seed: &str) -> String {
    format!("https://picsum.photos/seed/{}/300/400", seed)
}
