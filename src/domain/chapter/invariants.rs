use super::entity::Chapter;
use crate::domain::{DomainError, DomainResult};

/// Validates all Chapter invariants
pub fn validate_chapter(chapter: &Chapter) -> DomainResult<()> {
    if chapter.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Chapter title cannot be empty".to_string(),
        ));
    }

    if chapter.book_id.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Chapter must belong to a book".to_string(),
        ));
    }

    Ok(())
}
