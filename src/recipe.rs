// src/recipe.rs

//! Recipe aggregate: a named, ordered ingredient list plus preparation steps
//!
//! The recipe name is normalized the same way ingredient names are, so exact
//! name lookups are case- and whitespace-insensitive. Ingredient order is
//! preserved for display and duplicates are permitted.

use crate::ingredient::{normalize, Ingredient};
use serde::Serialize;

/// A single recipe from the catalog
///
/// Immutable after construction; the catalog owns its recipes for the process
/// lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
}

impl Recipe {
    /// Create a recipe from a raw name, an ordered ingredient list, and a
    /// steps text blob (one instruction per line)
    pub fn new(name: impl AsRef<str>, ingredients: Vec<Ingredient>, steps: &str) -> Self {
        Self {
            name: normalize(name.as_ref()),
            ingredients,
            steps: steps.lines().map(str::to_string).collect(),
        }
    }

    /// The normalized name, used as the lookup key for exact-match queries
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Title-cased name for display (`"gajar ka halwa"` -> `"Gajar Ka Halwa"`)
    pub fn display_name(&self) -> String {
        self.name
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Ingredients in insertion order
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Preparation steps, one instruction per entry
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Whether at least one of this recipe's ingredients appears in
    /// `available`
    ///
    /// This is a logical OR over set membership: a recipe needing five
    /// ingredients matches if the caller supplies just one of them. Not a
    /// subset test and not a coverage score.
    pub fn matches_ingredients(&self, available: &[Ingredient]) -> bool {
        self.ingredients.iter().any(|ing| available.contains(ing))
    }
}
