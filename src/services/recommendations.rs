use tracing::instrument;

use crate::{
    db::TasteRepository,
    error::{AppError, AppResult},
    models::{Dish, RecommendationResult, UserPreferences},
    services::{
        feature_vector::FeatureSchema,
        ranker::{rank, TOP_K},
        similarity::score_candidates,
    },
};

/// Ranks the catalog against one user's preferences.
///
/// Pure and synchronous: builds the query vector, one vector per dish, scores
/// them by cosine similarity and keeps the top [`TOP_K`] distinct dishes. An
/// empty catalog gives an empty result.
pub fn rank_dishes(
    schema: &FeatureSchema,
    preferences: &UserPreferences,
    dishes: &[Dish],
) -> AppResult<RecommendationResult> {
    if dishes.is_empty() {
        return Ok(RecommendationResult::default());
    }

    let query = schema.build(preferences)?;
    let candidates = schema.build_all(dishes)?;

    if query.is_zero() {
        tracing::debug!(
            user_id = %preferences.user_id,
            "Preference vector is all zeros, every dish scores 0"
        );
    }

    let scores = score_candidates(&query, &candidates)?;
    Ok(rank(dishes, &scores, TOP_K))
}

/// Generates the top dish recommendations for a stored user
///
/// Reads a fresh snapshot of the user's preferences and the dish catalog from
/// the repository on every call. Fails with [`AppError::UserNotFound`] when the
/// user never submitted a survey; the catalog is not read in that case.
#[instrument(skip(repository, schema), fields(schema = schema.version))]
pub async fn recommend(
    repository: &dyn TasteRepository,
    schema: &FeatureSchema,
    user_id: &str,
) -> AppResult<RecommendationResult> {
    let preferences = repository
        .fetch_user_preferences(user_id)
        .await?
        .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;

    let dishes = repository.fetch_all_dishes().await?;

    let result = rank_dishes(schema, &preferences, &dishes)?;

    tracing::info!(
        catalog_size = dishes.len(),
        returned = result.len(),
        "Recommendations computed"
    );

    Ok(result)
}
