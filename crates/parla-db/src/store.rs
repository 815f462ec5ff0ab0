use crate::models::{AppendedMessage, MessageRow};
use crate::{Database, StoreError};

/// The append-only message log the chat service and history endpoint talk to.
///
/// Calls are blocking; async callers run them on `spawn_blocking`.
pub trait MessageStore: Send + Sync + 'static {
    /// Durably write one message and return its id and store-assigned timestamp.
    fn append_message(&self, usuario: &str, mensaje: &str) -> Result<AppendedMessage, StoreError>;

    /// Every message, ascending by timestamp, ties in insertion order.
    fn list_messages(&self) -> Result<Vec<MessageRow>, StoreError>;
}

impl MessageStore for Database {
    fn append_message(&self, usuario: &str, mensaje: &str) -> Result<AppendedMessage, StoreError> {
        self.insert_message(usuario, mensaje)
    }

    fn list_messages(&self) -> Result<Vec<MessageRow>, StoreError> {
        self.get_messages()
    }
}
