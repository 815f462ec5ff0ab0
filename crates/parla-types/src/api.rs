use serde::{Deserialize, Serialize};

// -- Messages --

/// A chat message as clients see it, both in history and in live broadcasts.
/// Field names are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub usuario: String,
    pub mensaje: String,
    pub timestamp: String,
}

/// Inbound submission. Both fields may be absent or null; the chat service
/// drops the submission unless both are non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub usuario: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl SendMessageRequest {
    pub fn new(usuario: impl Into<String>, mensaje: impl Into<String>) -> Self {
        Self {
            usuario: Some(usuario.into()),
            mensaje: Some(mensaje.into()),
        }
    }

    /// Returns `(usuario, mensaje)` when both are present and non-empty.
    pub fn validated(&self) -> Option<(&str, &str)> {
        let usuario = self.usuario.as_deref().filter(|s| !s.is_empty())?;
        let mensaje = self.mensaje.as_deref().filter(|s| !s.is_empty())?;
        Some((usuario, mensaje))
    }
}

// -- Errors --

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
