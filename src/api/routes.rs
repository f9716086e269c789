use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        // Surveys and preferences
        .route("/submit_survey", post(handlers::submit_survey))
        .route("/preferences/:user_id", get(handlers::get_preferences))
        // Dish catalog
        .route("/dishes", get(handlers::get_dishes).post(handlers::create_dish))
        // Recommendations
        .route("/recommendations", get(handlers::get_recommendations))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
