use std::collections::HashMap;
use std::str::FromStr;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use smaakbalans_catalog::CookingMethod;
use smaakbalans_composition::{CompositionAnalysis, CompositionAnalyzer, CookingAssignments};

use crate::error::ApiError;
use crate::routes::AppState;

/// Request body for composition analysis
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(
        length(min = 1, max = 50, message = "Give between 1 and 50 ingredients"),
        custom(function = "validate_ingredient_names")
    )]
    pub ingredients: Vec<String>,

    /// Cooking method per ingredient name; unnamed ingredients count as raw.
    #[serde(default)]
    pub cooking_methods: HashMap<String, String>,
}

fn validate_ingredient_names(names: &[String]) -> Result<(), validator::ValidationError> {
    for name in names {
        if name.trim().is_empty() {
            let mut error = validator::ValidationError::new("blank_ingredient_name");
            error.message = Some(std::borrow::Cow::from("Ingredient names must not be blank"));
            return Err(error);
        }
        if name.chars().count() > 80 {
            let mut error = validator::ValidationError::new("ingredient_name_too_long");
            error.message = Some(std::borrow::Cow::from(
                "Ingredient names are limited to 80 characters",
            ));
            return Err(error);
        }
    }
    Ok(())
}

/// POST /api/compositions/analyze route handler
///
/// Runs a full composition analysis over the submitted ingredient names.
/// Every request recomputes from scratch; nothing is cached between calls.
///
/// # Returns
/// - 200 OK: `CompositionAnalysis` JSON
/// - 422 Unprocessable Entity: validation failure, unknown cooking method,
///   or a selection with nothing the catalog recognizes
#[tracing::instrument(skip(state, request), fields(ingredient_count = request.ingredients.len()))]
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<CompositionAnalysis>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut assignments = CookingAssignments::new();
    for (name, method) in &request.cooking_methods {
        let method = CookingMethod::from_str(method)
            .map_err(|_| ApiError::UnknownCookingMethod(method.clone()))?;
        assignments.insert(name.clone(), method);
    }

    let analyzer = CompositionAnalyzer::new(&state.catalog);
    let analysis = analyzer.analyze(&request.ingredients, &assignments)?;

    tracing::debug!(
        score = analysis.overall_score,
        missing = analysis.missing_elements.len(),
        "Composition analyzed"
    );

    Ok(Json(analysis))
}
