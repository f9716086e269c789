//! TasteRealm recommendation service.
//!
//! Stores taste surveys and a dish catalog, and ranks dishes for a user by the
//! cosine similarity between the user's flavor profile and each dish's
//! flavor attributes.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
