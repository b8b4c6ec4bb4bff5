// src/domain/character_relation.rs
//
// Character Relation Entity
//
// A directed address rule between two characters: `from` addresses `to`
// using `address` ("A gọi B là lão sư"). The reciprocal address form is not
// stored; the translation prompt instructs the model to infer it.
//
// CRITICAL INVARIANTS:
// - Self-referential relations are forbidden
// - Relations are global, like characters (not book-scoped)

use serde::{Deserialize, Serialize};

use crate::domain::ids;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRelation {
    /// Internal identifier
    pub id: String,

    /// The addressing character
    pub from: String,

    /// The addressed character
    pub to: String,

    /// Address term used by `from` towards `to`
    pub address: String,
}

impl CharacterRelation {
    /// Create a new relation
    ///
    /// Rejects relations where a character would address itself.
    pub fn new(from: String, to: String, address: String) -> DomainResult<Self> {
        if from == to {
            return Err(DomainError::SelfReferentialRelation);
        }

        Ok(Self {
            id: ids::new_id(),
            from,
            to,
            address,
        })
    }
}

/// Validates CharacterRelation invariants
pub fn validate_relation(relation: &CharacterRelation) -> DomainResult<()> {
    if relation.from == relation.to {
        return Err(DomainError::SelfReferentialRelation);
    }

    if relation.from.is_empty() || relation.to.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Relation must reference two characters".to_string(),
        ));
    }

    if relation.address.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Relation address cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_relation() {
        let relation =
            CharacterRelation::new("c1".to_string(), "c3".to_string(), "lão sư".to_string())
                .unwrap();
        assert!(validate_relation(&relation).is_ok());
        assert!(!relation.id.is_empty());
    }

    #[test]
    fn test_self_reference_rejected_at_creation() {
        let result =
            CharacterRelation::new("c1".to_string(), "c1".to_string(), "ta".to_string());
        assert!(matches!(result, Err(DomainError::SelfReferentialRelation)));
    }

    #[test]
    fn test_blank_address_fails() {
        let relation =
            CharacterRelation::new("c1".to_string(), "c2".to_string(), "  ".to_string()).unwrap();
        assert!(validate_relation(&relation).is_err());
    }
}
