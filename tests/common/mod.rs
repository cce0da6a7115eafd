#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Not every test binary uses every helper"
)]

use std::fs;
use std::path::{Path, PathBuf};

use esi_client::{Client, Config};
use httpmock::MockServer;
use serde_json::{Value, json};
use uuid::Uuid;

pub const TOKEN: &str = "test-token";
pub const PROJECT: &str = "esi-client-tests";

/// A settings file in the temp dir, removed on drop.
pub struct TempConfig {
    path: PathBuf,
}

impl TempConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: std::env::temp_dir().join(format!("esi-client-{}.json", Uuid::new_v4())),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, settings: &Value) {
        fs::write(&self.path, serde_json::to_string_pretty(settings).unwrap()).unwrap();
    }

    #[must_use]
    pub fn read(&self) -> Value {
        serde_json::from_str(&fs::read_to_string(&self.path).unwrap()).unwrap()
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        let _ignored = fs::remove_file(&self.path);
    }
}

#[must_use]
pub fn link(server: &MockServer) -> String {
    format!("{}/latest/", server.base_url())
}

/// A client pointed at `server`, optionally with an auth token.
pub fn client(server: &MockServer, token: Option<&str>) -> anyhow::Result<(Client, TempConfig)> {
    let config = TempConfig::new();
    config.write(&json!({
        "authToken": token.unwrap_or_default(),
        "language": "en/us",
        "link": link(server),
        "projectName": PROJECT
    }));

    let client = Client::new(Config::builder().settings_path(config.path()).build())?;

    Ok((client, config))
}
