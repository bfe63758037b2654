use std::sync::Arc;

use {flowwisper_config::Settings, flowwisper_sessions::SessionStore};

/// Shared request state. Read-only after startup, so it is safely cloned
/// into every handler without further synchronization.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(settings: Arc<Settings>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { settings, sessions }
    }
}
