//! Database row types, mapped directly from SQLite rows.
//! Distinct from parla-types wire models to keep the DB layer independent.

#[derive(Debug, Clone)]
pub struct MessageRow {
    pub id: String,
    pub usuario: String,
    pub mensaje: String,
    /// Store-assigned, RFC 3339 UTC. `None` only for rows written around the default.
    pub timestamp: Option<String>,
}

/// What the store hands back after a successful append.
#[derive(Debug, Clone)]
pub struct AppendedMessage {
    pub id: String,
    pub timestamp: String,
}
