use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Dish, NewDish, UserPreferences},
};

/// Persistence collaborator for preferences and the dish catalog
///
/// The recommendation core reads through this trait and never holds a
/// connection of its own. Implementations must return dishes in catalog order
/// (ascending `dish_id`) so ties rank deterministically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TasteRepository: Send + Sync {
    /// Fetch a user's stored preferences, `None` when the user never submitted a survey
    async fn fetch_user_preferences(&self, user_id: &str) -> AppResult<Option<UserPreferences>>;

    /// Fetch the full dish catalog
    async fn fetch_all_dishes(&self) -> AppResult<Vec<Dish>>;

    /// Insert or wholesale replace a user's preferences
    async fn upsert_user_preferences(&self, preferences: &UserPreferences) -> AppResult<()>;

    /// Add a dish and return it with its assigned id
    async fn insert_dish(&self, dish: NewDish) -> AppResult<Dish>;

    /// Number of dishes in the catalog
    async fn count_dishes(&self) -> AppResult<u64>;
}
