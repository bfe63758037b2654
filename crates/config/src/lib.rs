//! Flowwisper gateway configuration.
//!
//! Settings are resolved once at process start from `FLOWWISPER_`-prefixed
//! environment variables, with an optional `.env` file as fallback, and
//! shared read-only for the process lifetime. The loader performs no
//! caching; the binary constructs settings once and threads them into the
//! gateway explicitly.

mod loader;
mod schema;

pub use {
    loader::{ConfigError, ENV_PREFIX, load, load_from},
    schema::Settings,
};
