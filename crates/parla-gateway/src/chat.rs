use std::sync::Arc;

use tracing::{debug, warn};

use parla_db::{MessageStore, StoreError};
use parla_types::api::{ChatMessage, SendMessageRequest};
use parla_types::events::ServerEvent;
use parla_types::time::{TimestampFormat, parse_store_timestamp};

use crate::dispatcher::{Dispatcher, SessionId};

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("store task failed: {0}")]
    Join(String),
}

/// What happened to a submission that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Missing user or text; nothing was stored or sent.
    Skipped,
    /// Stored, then queued for `recipients` sessions.
    Broadcast { id: String, recipients: usize },
}

/// Persists inbound messages and fans them out to every session.
#[derive(Clone)]
pub struct ChatService {
    store: Arc<dyn MessageStore>,
    dispatcher: Dispatcher,
    time_format: TimestampFormat,
}

impl ChatService {
    pub fn new(store: Arc<dyn MessageStore>, dispatcher: Dispatcher, time_format: TimestampFormat) -> Self {
        Self {
            store,
            dispatcher,
            time_format,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Validate, persist, then broadcast.
    ///
    /// The broadcast happens only once the write has succeeded, and carries
    /// the store-assigned time. A failed write is returned to the caller and
    /// nothing is broadcast. Concurrent submissions are broadcast in the order
    /// their writes complete.
    pub async fn submit(
        &self,
        session_id: SessionId,
        req: SendMessageRequest,
    ) -> Result<SubmitOutcome, ChatError> {
        let Some((usuario, mensaje)) = req.validated() else {
            debug!("Session {} sent an incomplete message, dropping", session_id);
            return Ok(SubmitOutcome::Skipped);
        };
        let usuario = usuario.to_string();
        let mensaje = mensaje.to_string();

        // Run blocking store write off the async runtime
        let store = self.store.clone();
        let (u, m) = (usuario.clone(), mensaje.clone());
        let appended = tokio::task::spawn_blocking(move || store.append_message(&u, &m))
            .await
            .map_err(|e| ChatError::Join(e.to_string()))??;

        let timestamp = match parse_store_timestamp(&appended.timestamp) {
            Some(at) => self.time_format.format(at),
            None => {
                warn!("Corrupt timestamp '{}' on message '{}'", appended.timestamp, appended.id);
                appended.timestamp.clone()
            }
        };

        let recipients = self.dispatcher.broadcast(ServerEvent::NewMessage(ChatMessage {
            usuario,
            mensaje,
            timestamp,
        }));
        debug!(
            "Message {} from session {} sent to {} sessions",
            appended.id, session_id, recipients
        );

        Ok(SubmitOutcome::Broadcast {
            id: appended.id,
            recipients,
        })
    }
}
