use std::sync::Arc;

use crate::db::{InMemoryRepository, TasteRepository};
use crate::services::{FeatureSchema, TASTE_V2};

/// Shared application state
///
/// Holds no data of its own: every request reads a fresh snapshot through the
/// repository.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn TasteRepository>,
    pub schema: &'static FeatureSchema,
}

impl AppState {
    /// Creates state around a repository and feature schema
    pub fn new(repository: Arc<dyn TasteRepository>, schema: &'static FeatureSchema) -> Self {
        Self { repository, schema }
    }

    /// In-memory state holding the reference dish catalog
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::seeded()), &TASTE_V2)
    }

    /// In-memory state with no dishes
    pub fn empty() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()), &TASTE_V2)
    }
}
