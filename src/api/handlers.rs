use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppJson, AppResult},
    middleware::RequestId,
    models::{Dish, NewDish, RecommendationResult, UserPreferences},
    services::{recommendations, survey},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub status: String,
    pub user_id: String,
}

// Handlers

/// Landing page listing the main endpoints
pub async fn home() -> &'static str {
    "TasteRealm API is running! Endpoints: /submit_survey (POST) and /recommendations (GET)"
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Store a user's survey, replacing any earlier submission
pub async fn submit_survey(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    AppJson(payload): AppJson<Value>,
) -> AppResult<Json<SurveyResponse>> {
    let mut preferences = survey::parse_submission(payload)?;
    preferences.submitted_at = Some(Utc::now());

    tracing::info!(
        request_id = %request_id,
        user_id = %preferences.user_id,
        cuisines = preferences.cuisines.len(),
        "Storing survey submission"
    );

    state
        .repository
        .upsert_user_preferences(&preferences)
        .await?;

    Ok(Json(SurveyResponse {
        status: "success".to_string(),
        user_id: preferences.user_id,
    }))
}

/// Top dish recommendations for `?user_id=`
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResult>> {
    let user_id = query
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing query parameter: user_id".to_string()))?;

    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        "Processing recommendation request"
    );

    let result =
        recommendations::recommend(state.repository.as_ref(), state.schema, &user_id).await?;

    Ok(Json(result))
}

/// Stored preferences for one user
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserPreferences>> {
    let preferences = state
        .repository
        .fetch_user_preferences(&user_id)
        .await?
        .ok_or(AppError::UserNotFound(user_id))?;

    Ok(Json(preferences))
}

/// Full dish catalog
pub async fn get_dishes(State(state): State<AppState>) -> AppResult<Json<Vec<Dish>>> {
    let dishes = state.repository.fetch_all_dishes().await?;
    Ok(Json(dishes))
}

/// Add a dish to the catalog
pub async fn create_dish(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    AppJson(request): AppJson<NewDish>,
) -> AppResult<(StatusCode, Json<Dish>)> {
    request.validate().map_err(AppError::InvalidInput)?;

    let dish = state.repository.insert_dish(request).await?;

    tracing::info!(
        request_id = %request_id,
        dish_id = dish.dish_id,
        name = %dish.name,
        "Dish added"
    );

    Ok((StatusCode::CREATED, Json(dish)))
}
