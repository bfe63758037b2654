//! Session Store capability for the Flowwisper gateway.
//!
//! The session entity is owned by the (future) sync service; the gateway
//! only depends on the [`SessionStore`] trait and ships a placeholder
//! implementation until that backend lands. Swapping in a real backend
//! must not change the router contract.

mod store;
mod types;

pub use {
    store::{PLACEHOLDER_SESSION_ID, PlaceholderSessionStore, SessionStore, SessionStoreError},
    types::{SessionId, SessionSummary},
};
