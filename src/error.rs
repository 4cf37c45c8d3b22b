//! Stable error codes for HTTP clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Seeding failed: {0}")]
    SeedFailure(String),

    #[error("Query failed: {0}")]
    QueryFailure(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::SeedFailure(_) => "SEED_FAILURE",
            Self::QueryFailure(_) => "QUERY_FAILURE",
            Self::Server(_) => "SERVER_ERROR",
        }
    }

    pub fn to_serde(&self) -> AppErrorDto {
        AppErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        }
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_serde().serialize(serializer)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("{} ({})", self, self.code());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self.to_serde())).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
