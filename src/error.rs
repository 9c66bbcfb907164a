use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use strum::VariantArray;
use thiserror::Error;

use smaakbalans_catalog::CookingMethod;
use smaakbalans_composition::CompositionError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown cooking method: {0}")]
    UnknownCookingMethod(String),

    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("Composition error: {0}")]
    Composition(#[from] CompositionError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error payload with actionable guidance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionLink>,
}

/// Action link for error recovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLink {
    pub label: String,
    pub url: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            ApiError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "ValidationError".to_string(),
                    message,
                    details: None,
                    action: None,
                },
            ),
            ApiError::UnknownCookingMethod(given) => {
                let valid: Vec<String> = CookingMethod::VARIANTS
                    .iter()
                    .map(|method| method.to_string())
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse {
                        error: "UnknownCookingMethod".to_string(),
                        message: format!("'{}' is not a cooking method this service knows.", given),
                        details: Some(serde_json::json!({ "valid_methods": valid })),
                        action: None,
                    },
                )
            }
            ApiError::UnknownIngredient(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "UnknownIngredient".to_string(),
                    message: format!("No ingredient with id '{}' in the catalog.", id),
                    details: None,
                    action: Some(ActionLink {
                        label: "Browse the catalog".to_string(),
                        url: "/api/ingredients".to_string(),
                    }),
                },
            ),
            ApiError::Composition(CompositionError::EmptySelection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "EmptySelection".to_string(),
                    message: "Give at least one ingredient to analyze.".to_string(),
                    details: None,
                    action: None,
                },
            ),
            ApiError::Composition(CompositionError::NoKnownIngredients { unrecognized }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "NoKnownIngredients".to_string(),
                    message: "None of the given ingredients are in the catalog.".to_string(),
                    details: Some(serde_json::json!({ "unrecognized": unrecognized })),
                    action: Some(ActionLink {
                        label: "Browse the catalog".to_string(),
                        url: "/api/ingredients".to_string(),
                    }),
                },
            ),
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "InternalError".to_string(),
                        message: "An unexpected error occurred. Please try again later.".to_string(),
                        details: None,
                        action: None,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}
