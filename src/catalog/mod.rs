// src/catalog/mod.rs

//! The recipe catalog
//!
//! A [`Catalog`] is a fixed ordered sequence of recipes, built once at
//! startup and immutable for the process lifetime. It is constructed
//! explicitly and handed to the engine; there is no ambient global state.
//!
//! Duplicate recipe names are permitted and preserved. The builtin data
//! carries several (Biryani, Chana Chaat, Gulab Jamun, Haleem, and others)
//! and name lookup is defined as first-match-wins, so catalog order is part
//! of the contract.

mod builtin;
mod file;

pub use file::CatalogFile;

use crate::recipe::Recipe;
use crate::Result;
use serde::Serialize;
use std::path::Path;

/// Fixed ordered collection of all known recipes
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Create a catalog from an ordered list of recipes
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The compiled-in catalog
    pub fn builtin() -> Self {
        builtin::build()
    }

    /// Load a catalog from a TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        file::load(path)
    }

    /// Recipes in catalog order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_nonempty() {
        let catalog = Catalog::builtin();
        assert!(catalog.len() > 80);
    }

    #[test]
    fn test_builtin_preserves_duplicates() {
        let catalog = Catalog::builtin();
        let biryanis: Vec<usize> = catalog
            .iter()
            .enumerate()
            .filter(|(_, r)| r.name() == "biryani")
            .map(|(i, _)| i)
            .collect();
        assert!(biryanis.len() >= 2, "builtin data should keep duplicate names");
    }

    #[test]
    fn test_builtin_names_are_normalized() {
        let catalog = Catalog::builtin();
        for recipe in catalog.iter() {
            assert_eq!(recipe.name(), recipe.name().trim().to_lowercase());
        }
    }
}
