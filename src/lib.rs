#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod cache;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod response;
pub(crate) mod serde_helpers;
pub mod settings;
pub mod types;
pub mod utility;
pub mod validation;

pub use cache::{CacheEntry, CacheStats, EntryStats, EtagCache};
pub use client::{Client, Config};
pub use request::{Fingerprint, Method, Request};
pub use response::Response;
pub use settings::{Channel, Settings, SettingsStore, SettingsUpdate};

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
