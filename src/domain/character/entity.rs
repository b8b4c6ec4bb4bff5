use serde::{Deserialize, Serialize};

use crate::domain::ids;

/// A named entity with source/target names and narrative metadata
/// used to steer translation style
///
/// Characters are intentionally global rather than book-scoped: the persisted
/// layout carries no book reference for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Internal immutable identifier
    pub id: String,

    /// Source-language (Chinese) name
    pub name_cn: String,

    /// Target-language (Vietnamese) name
    pub name_vi: String,

    /// Alias or epithet (may be empty)
    pub alias: String,

    /// Free-text notes about personality and background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// How the narrator refers to this character in third person
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_3rd: Option<String>,
}

impl Character {
    /// Create a new Character entity
    pub fn new(name_cn: String, name_vi: String, alias: String) -> Self {
        Self {
            id: ids::new_id(),
            name_cn,
            name_vi,
            alias,
            notes: None,
            address_3rd: None,
        }
    }
}
