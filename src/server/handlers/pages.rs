// src/server/handlers/pages.rs

//! HTML form page and search results
//!
//! The page template is embedded at compile time; rendering is plain
//! placeholder substitution. The search handler applies the same dispatch
//! rule as the CLI: recipe name first, then ingredients, otherwise a prompt
//! to provide input.

use crate::query::Query;
use crate::recipe::Recipe;
use crate::server::ServerState;
use axum::{
    extract::{Query as UrlQuery, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

/// Page template embedded at compile time to avoid runtime filesystem IO
const PAGE_TEMPLATE: &str = include_str!("../../../templates/index.html");

/// Query parameters from the search form
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Comma-separated ingredient list
    #[serde(default)]
    pub ingredients: String,
    /// Recipe name (takes precedence when non-empty)
    #[serde(default)]
    pub name: String,
}

/// GET / - the empty query form
pub async fn index() -> Html<String> {
    Html(render_page("", "", ""))
}

/// GET /search - form submission
pub async fn search(
    State(state): State<Arc<ServerState>>,
    UrlQuery(params): UrlQuery<SearchParams>,
) -> Html<String> {
    let engine = &state.engine;

    let results = match Query::from_fields(&params.ingredients, &params.name) {
        Query::ByName(name) => match engine.get_recipe_by_name(&name) {
            Some(recipe) => render_recipe(recipe),
            None => message("error", "No recipe found with the given name."),
        },
        Query::ByIngredients(ingredients) => {
            let matches = engine.suggest_recipes(&ingredients);
            tracing::info!(
                "Ingredient search for {} ingredients: {} matches",
                ingredients.len(),
                matches.len()
            );
            if matches.is_empty() {
                message("error", "No recipes found for the given ingredients.")
            } else {
                matches
                    .into_iter()
                    .map(render_recipe)
                    .collect::<Vec<_>>()
                    .join("<hr>\n")
            }
        }
        Query::Empty => message(
            "warning",
            "Please enter at least one ingredient or a recipe name.",
        ),
    };

    Html(render_page(&params.ingredients, &params.name, &results))
}

/// Fill the page template, echoing the submitted field values back into the
/// form
fn render_page(ingredients_raw: &str, name_raw: &str, results: &str) -> String {
    PAGE_TEMPLATE
        .replace("{{ingredients}}", &escape(ingredients_raw))
        .replace("{{name}}", &escape(name_raw))
        .replace("{{results}}", results)
}

/// One recipe card: title-cased name, joined ingredients, one step per line
fn render_recipe(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients()
        .iter()
        .map(|ing| escape(ing.name()))
        .collect::<Vec<_>>()
        .join(", ");

    let steps = recipe
        .steps()
        .iter()
        .map(|step| format!("        <li>{}</li>", escape(step)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<div class=\"recipe\">\n\
             <h2>{}</h2>\n\
             <p><strong>Ingredients:</strong> {}</p>\n\
             <div class=\"steps-title\">Steps:</div>\n\
             <ul>\n{}\n    </ul>\n\
         </div>",
        escape(&recipe.display_name()),
        ingredients,
        steps
    )
}

fn message(class: &str, text: &str) -> String {
    format!("<p class=\"{}\">{}</p>", class, text)
}

/// Minimal HTML escaping for text interpolated into the page
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
