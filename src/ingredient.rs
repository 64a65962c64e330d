// src/ingredient.rs

//! Normalized ingredient names
//!
//! An [`Ingredient`] is a food-item name used both in recipe definitions and
//! in user queries. Names are normalized at construction (surrounding
//! whitespace trimmed, lower-cased) so that `"  Tomato "` and `"tomato"`
//! compare equal. Matching is exact on the normalized name: `"tomato"` and
//! `"tomatoes"` are different ingredients.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized food-item name
///
/// Equality is structural over the normalized name. The value is immutable
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Ingredient {
    name: String,
}

impl Ingredient {
    /// Create an ingredient from raw text, trimming whitespace and
    /// lower-casing
    ///
    /// Empty input yields an ingredient with an empty name; callers that
    /// split user input discard empty tokens before construction.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            name: normalize(raw.as_ref()),
        }
    }

    /// The normalized name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Trim surrounding whitespace and lower-case for comparison purposes
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Ingredient {
    fn from(raw: &str) -> Self {
        Ingredient::new(raw)
    }
}

impl From<String> for Ingredient {
    fn from(raw: String) -> Self {
        Ingredient::new(raw)
    }
}

impl From<Ingredient> for String {
    fn from(ingredient: Ingredient) -> Self {
        ingredient.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let a = Ingredient::new("  Tomato ");
        let b = Ingredient::new("tomato");
        assert_eq!(a, b);
        assert_eq!(a.name(), "tomato");
    }

    #[test]
    fn test_exact_match_only() {
        assert_ne!(Ingredient::new("tomato"), Ingredient::new("tomatoes"));
    }

    #[test]
    fn test_empty_input_permitted() {
        let empty = Ingredient::new("   ");
        assert_eq!(empty.name(), "");
    }

    #[test]
    fn test_display_uses_normalized_name() {
        assert_eq!(Ingredient::new(" Garlic Powder ").to_string(), "garlic powder");
    }

    #[test]
    fn test_serde_round_trip_normalizes() {
        let ing: Ingredient = serde_json::from_str("\" Chana Daal \"").unwrap();
        assert_eq!(ing, Ingredient::new("chana daal"));
        assert_eq!(serde_json::to_string(&ing).unwrap(), "\"chana daal\"");
    }
}
