use axum::{Json, extract::State};
use tracing::{error, warn};

use parla_db::MessageRow;
use parla_types::api::ChatMessage;
use parla_types::time::{TimestampFormat, parse_store_timestamp};

use crate::error::ApiError;
use crate::state::AppState;

/// Full message history, oldest first.
pub async fn get_messages(State(state): State<AppState>) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    // Run blocking DB query off the async runtime
    let store = state.store.clone();
    let rows = tokio::task::spawn_blocking(move || store.list_messages())
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Join(e.to_string())
        })?
        .map_err(|e| {
            error!("Failed to load message history: {}", e);
            ApiError::from(e)
        })?;

    let messages = rows
        .into_iter()
        .map(|row| to_chat_message(row, &state.time_format))
        .collect();

    Ok(Json(messages))
}

fn to_chat_message(row: MessageRow, format: &TimestampFormat) -> ChatMessage {
    let timestamp = match row.timestamp.as_deref() {
        None => String::new(),
        Some(raw) => match parse_store_timestamp(raw) {
            Some(at) => format.format(at),
            None => {
                warn!("Corrupt timestamp '{}' on message '{}'", raw, row.id);
                raw.to_string()
            }
        },
    };

    ChatMessage {
        usuario: row.usuario,
        mensaje: row.mensaje,
        timestamp,
    }
}
