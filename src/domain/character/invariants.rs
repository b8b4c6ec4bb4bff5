use super::entity::Character;
use crate::domain::{DomainError, DomainResult};

/// Validates all Character invariants
///
/// Both names are required; alias, notes and third-person address are
/// optional styling hints.
pub fn validate_character(character: &Character) -> DomainResult<()> {
    if character.name_cn.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Character source name cannot be empty".to_string(),
        ));
    }

    if character.name_vi.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Character translated name cannot be empty".to_string(),
        ));
    }

    Ok(())
}
