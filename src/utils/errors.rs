//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores de la API y su conversión a
//! respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::time::now_iso;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Endpoint not found: {path}")]
    NotFound { path: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::MalformedBody(e.to_string())
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl AppError {
    pub fn not_found(path: &str) -> Self {
        AppError::NotFound {
            path: path.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedBody(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Cuerpo JSON del error; registra el fallo en el log
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            AppError::NotFound { path } => {
                warn!("🔍 Endpoint no encontrado: {}", path);
                ErrorResponse {
                    error: "Endpoint not found".to_string(),
                    message: None,
                    path: Some(path.clone()),
                    details: None,
                    timestamp: None,
                }
            }

            AppError::Validation(e) => {
                warn!("⚠️ Error de validación: {}", e);
                ErrorResponse {
                    error: "Validation error".to_string(),
                    message: Some("The provided data is invalid".to_string()),
                    path: None,
                    details: Some(json!(e)),
                    timestamp: Some(now_iso()),
                }
            }

            AppError::MalformedBody(msg) => {
                error!("❌ Body de la petición inválido: {}", msg);
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    message: Some(msg.clone()),
                    path: None,
                    details: None,
                    timestamp: Some(now_iso()),
                }
            }

            AppError::Internal(msg) => {
                error!("❌ Error interno: {}", msg);
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    message: Some("An unexpected error occurred".to_string()),
                    path: None,
                    details: None,
                    timestamp: Some(now_iso()),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.to_error_response())).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}
