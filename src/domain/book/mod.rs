pub mod entity;
pub mod invariants;

pub use entity::{placeholder_cover, Book};
pub use invariants::validate_book;
