use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    db::{seed_catalog, TasteRepository},
    error::AppResult,
    models::{Dish, NewDish, UserPreferences},
};

/// Process-local repository used for tests and `--in-memory` runs
#[derive(Default)]
pub struct InMemoryRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<String, UserPreferences>,
    dishes: Vec<Dish>,
    next_dish_id: i64,
}

impl InMemoryRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the reference dish catalog
    pub fn seeded() -> Self {
        Self::with_dishes(seed_catalog())
    }

    /// Creates a repository holding the given dishes, ids assigned in order
    pub fn with_dishes(dishes: Vec<NewDish>) -> Self {
        let dishes: Vec<Dish> = dishes
            .into_iter()
            .zip(1..)
            .map(|(dish, id)| dish.into_dish(id))
            .collect();
        let next_dish_id = dishes.len() as i64 + 1;

        Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                dishes,
                next_dish_id,
            }),
        }
    }
}

#[async_trait]
impl TasteRepository for InMemoryRepository {
    async fn fetch_user_preferences(&self, user_id: &str) -> AppResult<Option<UserPreferences>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(user_id).cloned())
    }

    async fn fetch_all_dishes(&self) -> AppResult<Vec<Dish>> {
        let inner = self.inner.read().await;
        Ok(inner.dishes.clone())
    }

    async fn upsert_user_preferences(&self, preferences: &UserPreferences) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .users
            .insert(preferences.user_id.clone(), preferences.clone());
        Ok(())
    }

    async fn insert_dish(&self, dish: NewDish) -> AppResult<Dish> {
        let mut inner = self.inner.write().await;
        let dish_id = inner.next_dish_id.max(1);
        inner.next_dish_id = dish_id + 1;

        let dish = dish.into_dish(dish_id);
        inner.dishes.push(dish.clone());
        Ok(dish)
    }

    async fn count_dishes(&self) -> AppResult<u64> {
        let inner = self.inner.read().await;
        Ok(inner.dishes.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_replaces_whole_record() {
        let repo = InMemoryRepository::new();

        let mut first = UserPreferences::new("alice").with_spice_tolerance(7.0);
        first.cuisines = vec!["Thai".to_string()];
        repo.upsert_user_preferences(&first).await.unwrap();

        let second = UserPreferences::new("alice").with_spice_tolerance(1.0);
        repo.upsert_user_preferences(&second).await.unwrap();

        let stored = repo.fetch_user_preferences("alice").await.unwrap().unwrap();
        assert_eq!(stored.spice_tolerance, 1.0);
        assert!(stored.cuisines.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_is_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.fetch_user_preferences("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_dish_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();

        let first = repo
            .insert_dish(NewDish::new("Guacamole", [1.0, 3.0, 2.0, 0.0, 2.0, 2.0]))
            .await
            .unwrap();
        let second = repo
            .insert_dish(NewDish::new("Falafel", [1.0, 0.0, 3.0, 0.0, 3.0, 2.0]))
            .await
            .unwrap();

        assert_eq!(first.dish_id, 1);
        assert_eq!(second.dish_id, 2);
        assert_eq!(repo.count_dishes().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seeded_catalog_continues_ids() {
        let repo = InMemoryRepository::seeded();
        let seeded = repo.count_dishes().await.unwrap();

        let added = repo
            .insert_dish(NewDish::new("Tonkotsu Ramen", [1.0, 0.0, 6.0, 0.0, 9.0, 1.0]))
            .await
            .unwrap();

        assert_eq!(added.dish_id, seeded as i64 + 1);

        let dishes = repo.fetch_all_dishes().await.unwrap();
        assert!(dishes.windows(2).all(|w| w[0].dish_id < w[1].dish_id));
    }
}
