// src/db/dataset.rs
//
// The full application dataset
//
// Persistence is whole-document: every snapshot carries all five collections
// together. There is no partial read or write.

use serde::{Deserialize, Serialize};

use crate::domain::{Book, Chapter, Character, CharacterRelation, GlossaryTerm};

/// All five record collections, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub books: Vec<Book>,
    pub chapters: Vec<Chapter>,
    pub glossary: Vec<GlossaryTerm>,
    pub characters: Vec<Character>,
    pub relations: Vec<CharacterRelation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_field_names() {
        let mut dataset = Dataset::default();
        dataset.books.push(Book {
            id: "1".to_string(),
            title: "Đấu Phá Thương Khung".to_string(),
            author: "Thiên Tằm Thổ Đậu".to_string(),
            genre: "Tiên Hiệp".to_string(),
            cover_url: "https://picsum.photos/seed/1/300/400".to_string(),
        });
        dataset.chapters.push(Chapter {
            id: "101".to_string(),
            book_id: "1".to_string(),
            title: "Chương 1".to_string(),
            original_content: "斗之力，三段！".to_string(),
            translated_content: String::new(),
        });

        let json = serde_json::to_value(&dataset).unwrap();

        // Wire names match the persisted layout, not Rust field names
        assert!(json["books"][0].get("coverUrl").is_some());
        assert!(json["chapters"][0].get("bookId").is_some());
        assert!(json["chapters"][0].get("originalContent").is_some());
        assert!(json["chapters"][0].get("translatedContent").is_some());
    }

    #[test]
    fn test_optional_character_fields_omitted() {
        let mut dataset = Dataset::default();
        dataset.characters.push(Character::new(
            "萧炎".to_string(),
            "Tiêu Viêm".to_string(),
            String::new(),
        ));

        let json = serde_json::to_value(&dataset).unwrap();
        assert!(json["characters"][0].get("notes").is_none());
        assert!(json["characters"][0].get("address_3rd").is_none());
    }
}
