use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use parla_db::StoreError;
use parla_types::api::ErrorResponse;

/// Errors a REST handler can turn into a response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("blocking task failed: {0}")]
    Join(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Callers only ever see a generic message; details stay in the server log.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Error al obtener mensajes".to_string(),
            }),
        )
            .into_response()
    }
}
