//! Session store: get-or-create keyed by caller-supplied id

use std::collections::HashMap;
use std::sync::Arc;

use moodcanvas_common::{time, Session};
use tokio::sync::RwLock;

/// Sessions by id; entries are never removed
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the session if unseen, otherwise refresh its last activity
    ///
    /// Returns a snapshot of the stored record.
    pub async fn touch(&self, id: String) -> Session {
        let now = time::now();
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(id)
            .and_modify(|s| s.touch(now))
            .or_insert_with_key(|id| Session::new(id.clone(), now))
            .clone()
    }

    #[cfg(test)]
    pub async fn get(&self, id: &str) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Number of known sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
