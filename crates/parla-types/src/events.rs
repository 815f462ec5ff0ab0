use serde::{Deserialize, Serialize};

use crate::api::{ChatMessage, SendMessageRequest};

/// Events sent FROM server TO clients over the WebSocket gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerEvent {
    /// A message was persisted and is being fanned out to every session
    #[serde(rename = "nuevo-mensaje")]
    NewMessage(ChatMessage),
}

impl ServerEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMessage(_) => "nuevo-mensaje",
        }
    }
}

/// Events sent FROM client TO server over WebSocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientEvent {
    /// Submit a chat message
    #[serde(rename = "enviar-mensaje")]
    SendMessage(SendMessageRequest),
}
