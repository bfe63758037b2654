use serde::{Deserialize, Serialize};

/// Resolved gateway settings.
///
/// Built once at startup by [`crate::load`] and shared read-only
/// (`Arc<Settings>`) for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Version segment of the API prefix (`/api/{api_version}`).
    pub api_version: String,

    /// Origins accepted by the CORS layer.
    pub allow_origins: Vec<String>,

    /// Declared but not yet consulted for request gating; the gateway
    /// warns at startup when set.
    pub auth_required: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_version: "v1".into(),
            allow_origins: vec!["http://localhost:1420".into()],
            auth_required: false,
        }
    }
}

impl Settings {
    /// API route prefix derived from the configured version.
    pub fn api_prefix(&self) -> String {
        format!("/api/{}", self.api_version)
    }
}
