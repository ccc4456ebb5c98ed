//! The closed category set shared by transactions and budgets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Spending category.
///
/// The set is closed: anything else is rejected at the store boundary.
/// `Uncategorized` is the entry-time default and persists as itself.
///
/// Parsing is case-insensitive so that budget records entered as `"Food"`
/// and transactions stored as `"food"` normalize to the same variant once,
/// here, instead of being lowercased at every comparison site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Other,
    #[default]
    Uncategorized,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Self::Food,
        Self::Transportation,
        Self::Housing,
        Self::Utilities,
        Self::Entertainment,
        Self::Healthcare,
        Self::Shopping,
        Self::Other,
        Self::Uncategorized,
    ];

    /// Canonical lowercase string, as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::Housing => "housing",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Healthcare => "healthcare",
            Self::Shopping => "shopping",
            Self::Other => "other",
            Self::Uncategorized => "uncategorized",
        }
    }

    /// Capitalized label for presentation ("Food", "Healthcare", ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
            Self::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::Validation(format!("invalid category: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Category::try_from("food").unwrap(), Category::Food);
        assert_eq!(Category::try_from("Food").unwrap(), Category::Food);
        assert_eq!(Category::try_from("HEALTHCARE").unwrap(), Category::Healthcare);
        assert_eq!(Category::try_from(" shopping ").unwrap(), Category::Shopping);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert!(Category::try_from("groceries").is_err());
        assert!(Category::try_from("").is_err());
    }

    #[test]
    fn round_trips_through_canonical_string() {
        for category in Category::ALL {
            assert_eq!(Category::try_from(category.as_str()).unwrap(), category);
        }
    }

    #[test]
    fn default_is_uncategorized() {
        assert_eq!(Category::default(), Category::Uncategorized);
    }
}
