// src/query.rs

//! Query parsing and dispatch for the presentation surfaces
//!
//! Both the web form and the CLI collect two free-text fields: a
//! comma-separated ingredient list and an optional recipe name. This module
//! turns those raw fields into a [`Query`] using one dispatch rule: a
//! non-empty name wins, otherwise a non-empty ingredient list, otherwise the
//! submission is empty and the engine is never consulted.

use crate::ingredient::Ingredient;

/// A parsed user submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Exact-name lookup
    ByName(String),
    /// Ingredient-overlap search
    ByIngredients(Vec<Ingredient>),
    /// Neither field was filled in; the user should be prompted for input
    Empty,
}

impl Query {
    /// Apply the dispatch rule to the two raw form fields
    pub fn from_fields(ingredients_raw: &str, name_raw: &str) -> Self {
        let name = name_raw.trim();
        if !name.is_empty() {
            return Query::ByName(name.to_string());
        }

        let ingredients = parse_ingredients(ingredients_raw);
        if !ingredients.is_empty() {
            return Query::ByIngredients(ingredients);
        }

        Query::Empty
    }
}

/// Split a comma-separated ingredient string into ingredients
///
/// Tokens are trimmed, empty tokens discarded, order preserved.
pub fn parse_ingredients(raw: &str) -> Vec<Ingredient> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Ingredient::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_trims_and_drops_empties() {
        let parsed = parse_ingredients(" tomato ,, chicken , ,onion");
        assert_eq!(
            parsed,
            vec![
                Ingredient::new("tomato"),
                Ingredient::new("chicken"),
                Ingredient::new("onion"),
            ]
        );
    }

    #[test]
    fn test_empty_string_parses_to_nothing() {
        assert!(parse_ingredients("").is_empty());
        assert!(parse_ingredients(" , , ").is_empty());
    }

    #[test]
    fn test_name_takes_precedence() {
        let query = Query::from_fields("tomato, chicken", " Biryani ");
        assert_eq!(query, Query::ByName("Biryani".to_string()));
    }

    #[test]
    fn test_ingredients_when_name_blank() {
        let query = Query::from_fields("tomato", "   ");
        assert_eq!(
            query,
            Query::ByIngredients(vec![Ingredient::new("tomato")])
        );
    }

    #[test]
    fn test_both_blank_is_empty() {
        assert_eq!(Query::from_fields("", ""), Query::Empty);
        assert_eq!(Query::from_fields(" , ", "  "), Query::Empty);
    }
}
