// src/server/handlers/recipes.rs

//! JSON API over the matching engine
//!
//! Mirrors the engine contract exactly: catalog order, no dedup, first match
//! wins on duplicate names, and a lookup miss is a 404 with an error body
//! rather than a failure.

use crate::ingredient::Ingredient;
use crate::server::ServerState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Request body for ingredient search
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Raw ingredient names; normalized on deserialization
    pub ingredients: Vec<Ingredient>,
}

/// GET /v1/recipes
///
/// The whole catalog, in order.
pub async fn list_recipes(State(state): State<Arc<ServerState>>) -> Response {
    Json(state.engine.catalog().recipes()).into_response()
}

/// GET /v1/recipes/:name
///
/// First catalog entry with the given name, case/whitespace-insensitive.
pub async fn get_recipe(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> Response {
    match state.engine.get_recipe_by_name(&name) {
        Some(recipe) => Json(recipe).into_response(),
        None => {
            let error = serde_json::json!({
                "error": "not_found",
                "message": format!("no recipe named {:?}", name),
            });
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// POST /v1/suggest
///
/// Every recipe sharing at least one ingredient with the request, in catalog
/// order. An empty result is an empty array, never an error.
pub async fn suggest(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SuggestRequest>,
) -> Response {
    let matches = state.engine.suggest_recipes(&request.ingredients);
    Json(matches).into_response()
}
