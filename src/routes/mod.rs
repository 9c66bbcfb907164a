use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use smaakbalans_catalog::Catalog;

mod analyze;
mod health;
mod ingredients;

pub use analyze::AnalyzeRequest;
pub use ingredients::{CookingMethodInfo, IngredientSummary};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub catalog: Arc<Catalog>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        // Composition analysis
        .route("/api/compositions/analyze", post(analyze::analyze))
        // Catalog lookups
        .route("/api/ingredients", get(ingredients::list_ingredients))
        .route("/api/ingredients/{id}", get(ingredients::get_ingredient))
        .route("/api/cooking-methods", get(ingredients::list_cooking_methods))
        .with_state(app_state)
}
