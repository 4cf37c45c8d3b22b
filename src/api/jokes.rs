//! Joke route handlers.

use crate::app::joke_texts;
use crate::error::AppError;
use crate::infra::DbPool;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct JokeListResp {
    pub jokes: Vec<String>,
}

/// `GET /api/jokes`
pub async fn list_jokes(State(pool): State<Arc<DbPool>>) -> Result<Json<JokeListResp>, AppError> {
    let jokes = tokio::task::spawn_blocking(move || joke_texts(&pool))
        .await
        .map_err(|e| AppError::QueryFailure(e.to_string()))??;
    Ok(Json(JokeListResp { jokes }))
}
