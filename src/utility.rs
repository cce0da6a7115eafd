//! Settings, cache management, and a delay primitive, reachable through [`Client::util`].

use std::time::Duration;

use crate::Result;
use crate::cache::CacheStats;
use crate::client::Client;
use crate::settings::{Settings, SettingsUpdate};

#[derive(Clone, Copy, Debug)]
pub struct Utility<'client> {
    client: &'client Client,
}

impl<'client> Utility<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// The settings requests are currently built from.
    pub fn settings(&self) -> Result<Settings> {
        self.client.settings().get()
    }

    /// Persists `update` and returns the merged settings.
    ///
    /// See [`SettingsStore::set`](crate::settings::SettingsStore::set).
    pub fn set_settings(&self, update: &SettingsUpdate) -> Result<Settings> {
        self.client.settings().set(update)
    }

    /// Removes the cache entry for `fingerprint`, or every entry when `None`. Returns how many
    /// entries were removed.
    pub fn clear_cache(&self, fingerprint: Option<&str>) -> usize {
        self.client.cache().clear(fingerprint)
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.client.cache().stats()
    }

    /// Waits for `duration` without blocking the runtime.
    pub async fn sleep(&self, duration: Duration) {
        sleep(duration).await;
    }
}

/// Waits for `duration` without blocking the runtime.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
