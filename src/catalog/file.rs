// src/catalog/file.rs

//! Catalog loading from TOML files
//!
//! File format:
//!
//! ```toml
//! [[recipes]]
//! name = "Biryani"
//! ingredients = ["rice", "chicken", "yogurt", "spices", "onion"]
//! steps = [
//!     "1. Marinate chicken with yogurt and spices.",
//!     "2. Layer rice and chicken, cook on low heat.",
//! ]
//! ```
//!
//! Names and ingredients pass through the same normalizing constructors as
//! the builtin data, so file-loaded catalogs behave identically under lookup.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::ingredient::Ingredient;
use crate::recipe::Recipe;
use serde::Deserialize;
use std::path::Path;

/// TOML catalog file structure
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub recipes: Vec<RecipeEntry>,
}

/// One `[[recipes]]` table
#[derive(Debug, Deserialize)]
pub struct RecipeEntry {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Load and validate a catalog from a TOML file
pub(super) fn load(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let file: CatalogFile = toml::from_str(&content).map_err(|source| Error::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut recipes = Vec::with_capacity(file.recipes.len());
    for (index, entry) in file.recipes.into_iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(Error::InvalidCatalog(format!(
                "recipe at index {} has an empty name",
                index
            )));
        }
        recipes.push(Recipe::new(
            &entry.name,
            entry.ingredients.iter().map(Ingredient::new).collect(),
            &entry.steps.join("\n"),
        ));
    }

    tracing::debug!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(Catalog::new(recipes))
}
