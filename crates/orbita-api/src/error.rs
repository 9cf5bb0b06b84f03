use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] orbita_history::StorageError),

    #[error(transparent)]
    Agent(#[from] orbita_agent::AgentError),

    #[error(transparent)]
    SpaceData(#[from] orbita_spacedata::SpaceDataError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Chat relay failures: the body carries the failure description
            // under "detail".
            ApiError::Storage(ref e) => {
                tracing::error!("Storage error: {}", e);
                let body = Json(json!({ "detail": self.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            ApiError::Agent(ref e) => {
                tracing::error!("Agent error: {}", e);
                let body = Json(json!({ "detail": self.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            // Proxy failures: flat "error" message with a fixed prefix.
            ApiError::SpaceData(ref e) => {
                tracing::error!("Space data error: {}", e);
                let body = Json(json!({
                    "error": format!("Falha ao processar dados da NASA: {}", e)
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
