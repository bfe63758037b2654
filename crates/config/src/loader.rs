use std::{collections::HashMap, path::Path};

use tracing::debug;

use crate::schema::Settings;

/// Prefix shared by every recognized environment variable.
pub const ENV_PREFIX: &str = "FLOWWISPER_";

/// Env file checked by [`load`] when no explicit path is given.
const ENV_FILENAME: &str = ".env";

const KEY_API_VERSION: &str = "FLOWWISPER_API_VERSION";
const KEY_ALLOW_ORIGINS: &str = "FLOWWISPER_ALLOW_ORIGINS";
const KEY_AUTH_REQUIRED: &str = "FLOWWISPER_AUTH_REQUIRED";

/// Error raised when settings cannot be constructed. Fatal at startup:
/// the process must not serve traffic on a malformed configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid boolean for {key}: {value:?} (expected true/false/1/0/yes/no/on/off)")]
    InvalidBool { key: &'static str, value: String },

    #[error("invalid origin list for {key}: {reason}")]
    InvalidOrigins { key: &'static str, reason: String },

    #[error("failed to read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Load settings from the process environment, falling back to `./.env`
/// if present.
pub fn load() -> Result<Settings, ConfigError> {
    let default_file = Path::new(ENV_FILENAME);
    load_from(default_file.exists().then_some(default_file))
}

/// Load settings from the process environment with an explicit env file as
/// fallback.
///
/// Resolution order per variable: process environment, then the file, then
/// the built-in default. Variable names carry the `FLOWWISPER_` prefix in
/// both sources. The file is read through dotenvy's iterator API, so the
/// process environment is never mutated.
pub fn load_from(env_file: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut vars = HashMap::new();

    if let Some(path) = env_file {
        let iter = dotenvy::from_path_iter(path).map_err(|source| ConfigError::EnvFile {
            path: path.display().to_string(),
            source,
        })?;
        for item in iter {
            let (key, value) = item.map_err(|source| ConfigError::EnvFile {
                path: path.display().to_string(),
                source,
            })?;
            vars.insert(key, value);
        }
        debug!(path = %path.display(), "loaded env file");
    }

    // Process environment wins over the file.
    for (key, value) in std::env::vars() {
        if key.starts_with(ENV_PREFIX) {
            vars.insert(key, value);
        }
    }

    build(&vars)
}

/// Assemble settings from a resolved variable map.
fn build(vars: &HashMap<String, String>) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    if let Some(value) = vars.get(KEY_API_VERSION) {
        settings.api_version = value.trim().to_string();
    }
    if let Some(value) = vars.get(KEY_ALLOW_ORIGINS) {
        settings.allow_origins = parse_origins(value)?;
    }
    if let Some(value) = vars.get(KEY_AUTH_REQUIRED) {
        settings.auth_required =
            parse_bool(value).ok_or_else(|| ConfigError::InvalidBool {
                key: KEY_AUTH_REQUIRED,
                value: value.clone(),
            })?;
    }

    Ok(settings)
}

/// Parse an origin list: a JSON string array (the upstream convention) or
/// a comma-separated list.
fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| ConfigError::InvalidOrigins {
            key: KEY_ALLOW_ORIGINS,
            reason: e.to_string(),
        });
    }

    let origins: Vec<String> = trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if origins.is_empty() {
        return Err(ConfigError::InvalidOrigins {
            key: KEY_ALLOW_ORIGINS,
            reason: "empty list".into(),
        });
    }
    Ok(origins)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
