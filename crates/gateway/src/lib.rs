//! Gateway: versioned HTTP surface, CORS policy, liveness probe.
//!
//! Lifecycle:
//! 1. Load + validate settings
//! 2. Build the router (health + versioned session routes, CORS layer)
//! 3. Bind and serve
//!
//! Session semantics live behind the `SessionStore` trait in
//! `flowwisper-sessions`; this crate only wires a store to routes.

pub mod server;
pub mod sessions;
pub mod state;
