// tests/server.rs

//! HTTP surface tests: form page, search dispatch and messages, JSON API.

#![cfg(feature = "server")]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pantry::server::{create_router, ServerState};
use pantry::Catalog;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    create_router(Arc::new(ServerState::new(Catalog::builtin())))
}

async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_serves_the_form() {
    let (status, body) = get_body(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"ingredients\""));
    assert!(body.contains("name=\"name\""));
}

#[tokio::test]
async fn test_search_by_name_renders_recipe() {
    let (status, body) = get_body(app(), "/search?name=BIRYANI&ingredients=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2>Biryani</h2>"));
    assert!(body.contains("Ingredients:"));
    assert!(body.contains("Steps:"));
}

#[tokio::test]
async fn test_search_by_name_miss_shows_message() {
    let (_, body) = get_body(app(), "/search?name=pizza&ingredients=").await;
    assert!(body.contains("No recipe found with the given name."));
}

#[tokio::test]
async fn test_search_by_ingredients_renders_matches() {
    let (_, body) = get_body(app(), "/search?ingredients=onion&name=").await;
    assert!(body.contains("<h2>Biryani</h2>"));
}

#[tokio::test]
async fn test_search_without_matches_shows_message() {
    let (_, body) = get_body(app(), "/search?ingredients=kale&name=").await;
    assert!(body.contains("No recipes found for the given ingredients."));
}

#[tokio::test]
async fn test_empty_submission_prompts_for_input() {
    let (_, body) = get_body(app(), "/search?ingredients=&name=").await;
    assert!(body.contains("Please enter at least one ingredient or a recipe name."));
}

#[tokio::test]
async fn test_name_takes_precedence_over_ingredients() {
    let (_, body) = get_body(app(), "/search?ingredients=kale&name=lassi").await;
    assert!(body.contains("<h2>Lassi</h2>"));
    assert!(!body.contains("No recipes found"));
}

#[tokio::test]
async fn test_api_get_recipe_by_name() {
    let (status, body) = get_body(app(), "/v1/recipes/biryani").await;
    assert_eq!(status, StatusCode::OK);

    let recipe: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(recipe["name"], "biryani");
    assert!(recipe["ingredients"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("rice")));
}

#[tokio::test]
async fn test_api_unknown_recipe_is_404() {
    let (status, body) = get_body(app(), "/v1/recipes/pizza").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["error"], "not_found");
}

#[tokio::test]
async fn test_api_list_returns_whole_catalog() {
    let (status, body) = get_body(app(), "/v1/recipes").await;
    assert_eq!(status, StatusCode::OK);

    let recipes: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        recipes.as_array().unwrap().len(),
        Catalog::builtin().len()
    );
}

#[tokio::test]
async fn test_api_suggest_matches_in_catalog_order() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/suggest")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"ingredients": [" Onion ", "kale"]}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let matches: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let names: Vec<&str> = matches
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();

    assert!(!names.is_empty());
    assert_eq!(names[0], "biryani");
}

#[tokio::test]
async fn test_api_suggest_no_overlap_is_empty_array() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/suggest")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"ingredients": ["kale"]}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let matches: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(matches.as_array().unwrap().len(), 0);
}
