//! Category model

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a category
///
/// Stored as text so ids created by other TakeNote clients round-trip as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a new unique category ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CategoryId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A user-defined named grouping of notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,
    /// Display name
    pub name: String,
}

impl Category {
    /// Create a new category with the given name
    ///
    /// Surrounding whitespace is trimmed from the name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_new_trims_name() {
        let category = Category::new("  Work ");
        assert_eq!(category.name, "Work");
    }

    #[test]
    fn test_category_id_unique() {
        assert_ne!(CategoryId::new(), CategoryId::new());
    }

    #[test]
    fn test_category_id_keeps_foreign_ids() {
        let id: CategoryId = "deleted-1".parse().unwrap();
        assert_eq!(id.as_str(), "deleted-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"deleted-1\"");
    }
}
