use async_trait::async_trait;

use crate::types::{SessionId, SessionSummary};

/// Identifier returned by the placeholder store.
pub const PLACEHOLDER_SESSION_ID: &str = "demo";

/// Error surface for session store backends.
///
/// The placeholder store never produces one; the variant exists so a real
/// backend can report outages without changing the trait.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session backend unavailable: {0}")]
    Unavailable(String),
}

/// Backend capability the session routes depend on.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// List known sessions.
    async fn list(&self) -> Result<Vec<SessionSummary>, SessionStoreError>;

    /// Create a session. The creation request carries no schema yet, so
    /// this takes no parameters.
    async fn create(&self) -> Result<SessionId, SessionStoreError>;
}

/// Stateless stand-in used until the sync service backend exists.
///
/// `list` is always empty and `create` always yields the same id, so
/// repeated calls are indistinguishable from a single one.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderSessionStore;

#[async_trait]
impl SessionStore for PlaceholderSessionStore {
    async fn list(&self) -> Result<Vec<SessionSummary>, SessionStoreError> {
        Ok(Vec::new())
    }

    async fn create(&self) -> Result<SessionId, SessionStoreError> {
        Ok(SessionId(PLACEHOLDER_SESSION_ID.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_is_empty() {
        let store = PlaceholderSessionStore;
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_returns_demo_id() {
        let store = PlaceholderSessionStore;
        let id = store.create().await.unwrap();
        assert_eq!(id.as_str(), PLACEHOLDER_SESSION_ID);
    }

    #[tokio::test]
    async fn repeated_calls_observe_no_state_change() {
        let store = PlaceholderSessionStore;
        for _ in 0..3 {
            let id = store.create().await.unwrap();
            assert_eq!(id.as_str(), PLACEHOLDER_SESSION_ID);
            assert!(store.list().await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn session_id_serializes_transparently() {
        let id = SessionId("demo".into());
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""demo""#);
    }
}
