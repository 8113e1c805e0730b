//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid price: '{0}'")]
    InvalidPrice(String),

    #[error("Vehicle not found: '{0}'")]
    UnknownVehicle(String),

    #[error("Vehicle already rented: '{0}'")]
    AlreadyRented(String),

    #[error("Vehicle not rented: '{0}'")]
    NotRented(String),

    #[error("Timestamp error: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Inconsistent state: {0}")]
    Inconsistency(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::InvalidPrice(raw) => {
                eprintln!("Invalid price input: '{}'", raw);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Invalid Price".to_string(),
                        message: "Invalid price. Please enter a numeric value".to_string(),
                        details: Some(json!({ "price": raw })),
                        code: Some("INVALID_PRICE".to_string()),
                    },
                )
            }

            AppError::UnknownVehicle(id) => {
                eprintln!("Vehicle not found: '{}'", id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: format!("Vehicle '{}' not found", id),
                        details: None,
                        code: Some("VEHICLE_NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::AlreadyRented(id) => {
                eprintln!("Vehicle already rented: '{}'", id);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Not Available".to_string(),
                        // Mensaje combinado heredado del sistema original
                        message: "Vehicle not available or not found".to_string(),
                        details: Some(json!({ "vehicle_id": id, "reason": "already_rented" })),
                        code: Some("VEHICLE_NOT_AVAILABLE".to_string()),
                    },
                )
            }

            AppError::NotRented(id) => {
                eprintln!("Vehicle not rented: '{}'", id);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Not Rented".to_string(),
                        // Mensaje combinado heredado del sistema original
                        message: "Vehicle not rented or not found".to_string(),
                        details: Some(json!({ "vehicle_id": id, "reason": "currently_available" })),
                        code: Some("VEHICLE_NOT_RENTED".to_string()),
                    },
                )
            }

            AppError::Timestamp(e) => {
                eprintln!("Timestamp error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Timestamp Error".to_string(),
                        message: "Error parsing date format".to_string(),
                        details: Some(json!({ "parse_error": e.to_string() })),
                        code: Some("TIMESTAMP_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                eprintln!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Inconsistency(msg) => {
                eprintln!("Inconsistent state: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INCONSISTENT_STATE".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}
