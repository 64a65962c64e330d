// src/engine.rs

//! The matching engine
//!
//! [`MatchEngine`] is a stateless query service over an immutable, shared
//! catalog. Both operations are read-only, so the engine is safe to call
//! repeatedly and from concurrent request handlers without synchronization.

use crate::catalog::Catalog;
use crate::ingredient::{normalize, Ingredient};
use crate::recipe::Recipe;
use std::sync::Arc;

/// Query service over a shared recipe catalog
#[derive(Debug, Clone)]
pub struct MatchEngine {
    catalog: Arc<Catalog>,
}

impl MatchEngine {
    /// Create an engine over a shared catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this engine queries
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every recipe sharing at least one ingredient with `available`, in
    /// catalog order
    ///
    /// No deduplication and no ranking; duplicate-named entries appear as
    /// many times as they occur. An empty result is an empty vec, never an
    /// error.
    pub fn suggest_recipes(&self, available: &[Ingredient]) -> Vec<&Recipe> {
        self.catalog
            .iter()
            .filter(|recipe| recipe.matches_ingredients(available))
            .collect()
    }

    /// The first catalog entry whose normalized name equals the normalized
    /// query, if any
    ///
    /// The catalog may contain duplicate names; lookup is first-match, not
    /// uniqueness-guaranteed.
    pub fn get_recipe_by_name(&self, name: &str) -> Option<&Recipe> {
        let wanted = normalize(name);
        self.catalog.iter().find(|recipe| recipe.name() == wanted)
    }
}
