use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use strum::VariantArray;

use smaakbalans_catalog::{CookingEffect, CookingMethod, Ingredient, MoleculeType, Mouthfeel};

use crate::error::ApiError;
use crate::routes::AppState;

/// Compact catalog entry for list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSummary {
    pub id: String,
    pub name: String,
    pub name_nl: Option<String>,
    pub molecule_type: MoleculeType,
    pub can_be_carrier: bool,
    pub provides_umami: bool,
    pub provides_acidity: bool,
    pub provides_crunch: bool,
    pub mouthfeel: Mouthfeel,
}

impl From<&Ingredient> for IngredientSummary {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id.clone(),
            name: ingredient.name.clone(),
            name_nl: ingredient.name_nl.clone(),
            molecule_type: ingredient.molecule_type,
            can_be_carrier: ingredient.can_be_carrier,
            provides_umami: ingredient.provides_umami,
            provides_acidity: ingredient.provides_acidity,
            provides_crunch: ingredient.provides_crunch,
            mouthfeel: ingredient.mouthfeel,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to suppliers of one structural element.
    pub provides: Option<String>,
}

/// GET /api/ingredients route handler
///
/// Lists catalog entries, optionally filtered to the suppliers of one
/// structural element (`?provides=umami` and friends).
pub async fn list_ingredients(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<IngredientSummary>>, ApiError> {
    let filter: Option<fn(&Ingredient) -> bool> = match query.provides.as_deref() {
        None => None,
        Some("carrier") => Some(|i| i.can_be_carrier),
        Some("umami") => Some(|i| i.provides_umami),
        Some("acid") => Some(|i| i.provides_acidity),
        Some("crunch") => Some(|i| i.provides_crunch),
        Some("freshness") => Some(|i| i.has_fresh_aroma()),
        Some("richness") => Some(|i| i.is_rich()),
        Some(other) => {
            return Err(ApiError::Validation(format!(
                "Unknown provides filter '{}'; use carrier, umami, acid, crunch, freshness or richness",
                other
            )));
        }
    };

    let summaries: Vec<IngredientSummary> = state
        .catalog
        .iter()
        .filter(|ingredient| filter.map(|keep| keep(ingredient)).unwrap_or(true))
        .map(IngredientSummary::from)
        .collect();

    Ok(Json(summaries))
}

/// GET /api/ingredients/{id} route handler
///
/// Returns the full catalog entry, 404 when the id is unknown.
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ingredient>, ApiError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::UnknownIngredient(id))
}

/// One cooking method with its effect summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookingMethodInfo {
    pub method: CookingMethod,
    pub summary: String,
    pub preserves_freshness: bool,
}

/// GET /api/cooking-methods route handler
pub async fn list_cooking_methods() -> Json<Vec<CookingMethodInfo>> {
    let methods = CookingMethod::VARIANTS
        .iter()
        .map(|&method| {
            let effect = CookingEffect::for_method(method);
            CookingMethodInfo {
                method,
                summary: effect.summary(),
                preserves_freshness: effect.preserves_freshness,
            }
        })
        .collect();
    Json(methods)
}
