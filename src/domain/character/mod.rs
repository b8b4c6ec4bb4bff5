pub mod entity;
pub mod invariants;

pub use entity::Character;
pub use invariants::validate_character;
