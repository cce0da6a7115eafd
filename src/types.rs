//! Re-exported types from external crates for convenience.
//!
//! These types appear in this crate's public API and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Timestamps of cache entries and their age.
pub use chrono::{DateTime, TimeDelta, Utc};
/// Holder for the auth token; its `Debug` output never shows the secret.
pub use secrecy::{ExposeSecret, SecretString};
/// The opaque JSON payload of every [`Response`](crate::Response).
pub use serde_json::{Map, Value, json};
