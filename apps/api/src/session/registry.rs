use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::user::User;
use crate::session::workspace::Workspace;

struct Entry {
    workspace: Arc<Workspace>,
    last_seen: Instant,
}

/// Live sessions keyed by session id. Cheap to clone; clones share the map.
///
/// Bounded two ways: sessions idle for longer than `idle_timeout` expire, and
/// opening a session beyond `max_sessions` evicts the least recently used one.
#[derive(Clone)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn open(&self, user: User) -> (Uuid, Arc<Workspace>) {
        let id = Uuid::new_v4();
        let workspace = Arc::new(Workspace::new(user));
        let now = Instant::now();

        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_timeout);
        if sessions.len() < before {
            debug!("Expired {} idle sessions", before - sessions.len());
        }

        if sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
                info!("Session limit {} reached; evicted {oldest}", self.max_sessions);
            }
        }

        sessions.insert(
            id,
            Entry {
                workspace: Arc::clone(&workspace),
                last_seen: now,
            },
        );
        (id, workspace)
    }

    /// Looks up a live session and marks it used. Expired sessions are dropped.
    pub async fn get(&self, id: Uuid) -> Option<Arc<Workspace>> {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let entry = sessions.get_mut(&id)?;
        if now.duration_since(entry.last_seen) >= self.idle_timeout {
            sessions.remove(&id);
            debug!("Session {id} expired");
            return None;
        }
        entry.last_seen = now;
        Some(Arc::clone(&entry.workspace))
    }

    /// Drops the session. Returns false if it did not exist.
    pub async fn close(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    fn user(email: &str) -> User {
        User {
            email: email.to_string(),
            name: Some("Asha".to_string()),
        }
    }

    #[tokio::test]
    async fn test_open_get_close() {
        let registry = SessionRegistry::new(HOUR, 10);
        let (id, workspace) = registry.open(user("a@b.edu")).await;

        let found = registry.get(id).await.unwrap();
        assert!(Arc::ptr_eq(&found, &workspace));
        assert!(registry.close(id).await);
        assert!(registry.get(id).await.is_none());
        assert!(!registry.close(id).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_session_expires() {
        let registry = SessionRegistry::new(HOUR, 10);
        let (id, _) = registry.open(user("a@b.edu")).await;

        tokio::time::advance(HOUR - Duration::from_secs(1)).await;
        assert!(registry.get(id).await.is_some());

        // The lookup above refreshed it, so another almost-hour keeps it alive.
        tokio::time::advance(HOUR - Duration::from_secs(1)).await;
        assert!(registry.get(id).await.is_some());

        tokio::time::advance(HOUR).await;
        assert!(registry.get(id).await.is_none());
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_sweeps_expired_sessions() {
        let registry = SessionRegistry::new(HOUR, 10);
        for i in 0..5 {
            registry.open(user(&format!("s{i}@b.edu"))).await;
        }
        assert_eq!(registry.len().await, 5);

        tokio::time::advance(HOUR).await;
        let (fresh, _) = registry.open(user("fresh@b.edu")).await;
        assert_eq!(registry.len().await, 1);
        assert!(registry.get(fresh).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cap_evicts_least_recently_used() {
        let registry = SessionRegistry::new(HOUR, 2);
        let (first, _) = registry.open(user("first@b.edu")).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        let (second, _) = registry.open(user("second@b.edu")).await;
        tokio::time::advance(Duration::from_secs(1)).await;

        // Touching `first` makes `second` the least recently used.
        assert!(registry.get(first).await.is_some());
        tokio::time::advance(Duration::from_secs(1)).await;

        let (third, _) = registry.open(user("third@b.edu")).await;
        assert_eq!(registry.len().await, 2);
        assert!(registry.get(first).await.is_some());
        assert!(registry.get(second).await.is_none());
        assert!(registry.get(third).await.is_some());
    }
}
