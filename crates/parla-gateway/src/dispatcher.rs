use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

use parla_types::events::ServerEvent;

/// Opaque identifier of one WebSocket session.
pub type SessionId = Uuid;

/// Manages all connected sessions and broadcasts events.
#[derive(Clone, Default)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

#[derive(Default)]
struct DispatcherInner {
    /// Per-session outbound queues: session_id -> sender
    sessions: RwLock<HashMap<SessionId, mpsc::UnboundedSender<ServerEvent>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session. Returns (session_id, receiver); only events
    /// broadcast after this call reach the receiver.
    pub fn connect(&self) -> (SessionId, mpsc::UnboundedReceiver<ServerEvent>) {
        let session_id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();
        let count = {
            let mut sessions = self.write_sessions();
            sessions.insert(session_id, tx);
            sessions.len()
        };
        info!("Session {} connected ({} online)", session_id, count);
        (session_id, rx)
    }

    /// Remove a session. Returns false if it was not registered.
    pub fn disconnect(&self, session_id: SessionId) -> bool {
        let (removed, count) = {
            let mut sessions = self.write_sessions();
            let removed = sessions.remove(&session_id).is_some();
            (removed, sessions.len())
        };
        if removed {
            info!("Session {} disconnected ({} online)", session_id, count);
        }
        removed
    }

    /// Queue an event for every session registered right now.
    /// Returns how many sessions it was queued for.
    pub fn broadcast(&self, event: ServerEvent) -> usize {
        let sessions = self.read_sessions();
        sessions
            .values()
            .filter(|tx| tx.send(event.clone()).is_ok())
            .count()
    }

    pub fn session_count(&self) -> usize {
        self.read_sessions().len()
    }

    // The map is only touched inside these guards and never across an await,
    // so a poisoned lock still holds a consistent map.
    fn read_sessions(&self) -> RwLockReadGuard<'_, HashMap<SessionId, mpsc::UnboundedSender<ServerEvent>>> {
        self.inner.sessions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_sessions(&self) -> RwLockWriteGuard<'_, HashMap<SessionId, mpsc::UnboundedSender<ServerEvent>>> {
        self.inner.sessions.write().unwrap_or_else(|e| e.into_inner())
    }
}
