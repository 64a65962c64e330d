// src/server/routes.rs

//! Axum router configuration for the pantry server
//!
//! Two surfaces share one engine:
//! - HTML pages: the query form and its results
//! - JSON API under /v1 for programmatic clients

use crate::server::handlers::{pages, recipes};
use crate::server::ServerState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router
pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Form page and search results
        .route("/", get(pages::index))
        .route("/search", get(pages::search))
        // JSON API
        .route("/v1/recipes", get(recipes::list_recipes))
        .route("/v1/recipes/:name", get(recipes::get_recipe))
        .route("/v1/suggest", post(recipes::suggest))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let state = Arc::new(ServerState::new(Catalog::builtin()));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let state = Arc::new(ServerState::new(Catalog::builtin()));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
