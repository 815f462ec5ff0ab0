pub mod error;
pub mod history;
pub mod state;

use axum::{Router, routing::get};

use crate::state::AppState;

/// REST routes served next to the gateway.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/obtener-mensajes", get(history::get_messages))
        .with_state(state)
}
