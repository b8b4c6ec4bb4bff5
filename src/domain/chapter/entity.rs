use serde::{Deserialize, Serialize};

use crate::domain::ids;

/// One unit of source text plus its (possibly partial) translation
/// Belongs to exactly one Book, referenced by `book_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Internal immutable identifier
    pub id: String,

    /// Owning book
    pub book_id: String,

    /// Chapter title
    pub title: String,

    /// Source-language text
    pub original_content: String,

    /// Target-language text
    ///
    /// Starts empty; filled by manual editing or by streaming translation.
    pub translated_content: String,
}

impl Chapter {
    /// Create a new Chapter entity
    pub fn new(book_id: String, title: String, original_content: String) -> Self {
        Self {
            id: ids::new_id(),
            book_id,
            title,
            original_content,
            translated_content: String::new(),
        }
    }
}
