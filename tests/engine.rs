// tests/engine.rs

//! Matching semantics over real catalogs: ingredient search, name lookup,
//! ordering, and duplicate-name behavior.

use pantry::{Catalog, Ingredient, MatchEngine, Query, Recipe};
use std::sync::Arc;

fn engine_over(recipes: Vec<Recipe>) -> MatchEngine {
    MatchEngine::new(Arc::new(Catalog::new(recipes)))
}

fn biryani() -> Recipe {
    Recipe::new(
        "Biryani",
        ["rice", "chicken", "yogurt", "spices", "onion"]
            .iter()
            .map(Ingredient::new)
            .collect(),
        "1. Marinate chicken with yogurt and spices.\n2. Cook on low heat.",
    )
}

#[test]
fn test_single_ingredient_matches_biryani() {
    // Scenario A: one shared ingredient is enough.
    let engine = engine_over(vec![biryani()]);
    let matches = engine.suggest_recipes(&[Ingredient::new("onion")]);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name(), "biryani");
}

#[test]
fn test_unknown_ingredient_matches_nothing() {
    // Scenario B: no overlap, empty result, no error.
    let engine = engine_over(vec![biryani()]);
    assert!(engine.suggest_recipes(&[Ingredient::new("kale")]).is_empty());
}

#[test]
fn test_name_lookup_ignores_case_and_whitespace() {
    // Scenario C.
    let engine = engine_over(vec![biryani()]);
    let recipe = engine.get_recipe_by_name("  BIRYANI ").unwrap();
    assert_eq!(recipe.name(), "biryani");
}

#[test]
fn test_name_lookup_miss_is_none() {
    // Scenario D.
    let engine = engine_over(vec![biryani()]);
    assert!(engine.get_recipe_by_name("pizza").is_none());
}

#[test]
fn test_empty_submission_never_reaches_engine() {
    // Scenario E: empty ingredient string and empty name dispatch to Empty.
    assert_eq!(Query::from_fields("", ""), Query::Empty);
}

#[test]
fn test_duplicate_names_resolve_to_first_entry() {
    // Two entries named "biryani" at positions 0 and 2; lookup must return
    // the entry at position 0.
    let first = Recipe::new(
        "Biryani",
        vec![Ingredient::new("rice")],
        "first variant",
    );
    let second = Recipe::new(
        "Biryani",
        vec![Ingredient::new("vegetables")],
        "second variant",
    );
    let engine = engine_over(vec![
        first,
        Recipe::new("Lassi", vec![Ingredient::new("yogurt")], "blend"),
        second,
    ]);

    let found = engine.get_recipe_by_name("Biryani").unwrap();
    assert_eq!(found.steps(), ["first variant"]);
}

#[test]
fn test_suggest_preserves_catalog_order_and_duplicates() {
    let recipes = vec![
        Recipe::new("korma", vec![Ingredient::new("onion")], ""),
        Recipe::new("lassi", vec![Ingredient::new("yogurt")], ""),
        Recipe::new("bhel puri", vec![Ingredient::new("onion")], ""),
        Recipe::new("korma", vec![Ingredient::new("onion")], ""),
    ];
    let engine = engine_over(recipes);

    let names: Vec<&str> = engine
        .suggest_recipes(&[Ingredient::new("onion")])
        .iter()
        .map(|r| r.name())
        .collect();
    assert_eq!(names, ["korma", "bhel puri", "korma"]);
}

#[test]
fn test_builtin_catalog_first_match_on_duplicates() {
    // The builtin data carries duplicate names on purpose; lookup has to pin
    // the earliest occurrence.
    let catalog = Catalog::builtin();
    let first_index = catalog
        .iter()
        .position(|r| r.name() == "gulab jamun")
        .unwrap();
    let duplicate_count = catalog.iter().filter(|r| r.name() == "gulab jamun").count();
    assert!(duplicate_count >= 2);

    let engine = MatchEngine::new(Arc::new(catalog));
    let found = engine.get_recipe_by_name("Gulab Jamun").unwrap();
    assert_eq!(
        found.steps(),
        engine.catalog().recipes()[first_index].steps()
    );
}

#[test]
fn test_builtin_ingredient_search_runs_clean() {
    let engine = MatchEngine::new(Arc::new(Catalog::builtin()));
    let matches = engine.suggest_recipes(&[Ingredient::new("yogurt")]);
    assert!(!matches.is_empty());
    // Catalog order preserved: indices of the matches are strictly increasing.
    let mut last = None;
    for m in &matches {
        let index = engine
            .catalog()
            .iter()
            .position(|r| std::ptr::eq(r, *m))
            .unwrap();
        if let Some(prev) = last {
            assert!(index > prev);
        }
        last = Some(index);
    }
}

#[test]
fn test_query_dispatch_prefers_name() {
    let query = Query::from_fields("onion, rice", "Lassi");
    assert_eq!(query, Query::ByName("Lassi".to_string()));
}
