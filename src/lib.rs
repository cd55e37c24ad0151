use axum::{response::Json, routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod store;

pub use handlers::AppState;

use handlers::{dish_router, restaurant_router, ApiDoc};

/// Assemble the application router around an initialized store.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(restaurant_router())
        .merge(dish_router())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
}
