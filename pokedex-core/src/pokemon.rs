//! Domain entity for a single catalog entry.

use serde::{Deserialize, Serialize};

/// A single catalog entry, identified by its numeric index.
///
/// Immutable once fetched; consumers replace the whole value on every
/// successful fetch rather than patching fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Catalog index (always >= 1).
    pub index: u32,
    /// Lowercase species name as returned by the remote.
    pub name: String,
    /// Front sprite image URL, when the remote has one.
    pub sprite_url: Option<String>,
    /// Ability names in catalog order.
    pub abilities: Vec<String>,
    /// Base stats in catalog order.
    pub stats: Vec<StatValue>,
}

/// One named base stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub value: i64,
}

impl Pokemon {
    /// Name with the first letter upcased, for display.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
