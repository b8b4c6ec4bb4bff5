use super::entity::Book;
use crate::domain::{DomainError, DomainResult};

/// Validates all Book invariants
pub fn validate_book(book: &Book) -> DomainResult<()> {
    if book.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Book title cannot be empty".to_string(),
        ));
    }

    if book.author.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Book author cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_book() -> Book {
        Book::new(
            "Thần Mộ".to_string(),
            "Thần Đông".to_string(),
            "Huyền Huyễn".to_string(),
        )
    }

    #[test]
    fn test_valid_book() {
        assert!(validate_book(&valid_book()).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let mut book = valid_book();
        book.title = "   ".to_string();

        let result = validate_book(&book);
        assert!(result.is_err());

        if let Err(DomainError::InvariantViolation(msg)) = result {
            assert!(msg.contains("title"));
        } else {
            panic!("Expected InvariantViolation error");
        }
    }

    #[test]
    fn test_empty_author_fails() {
        let mut book = valid_book();
        book.author = String::new();
        assert!(validate_book(&book).is_err());
    }
}
