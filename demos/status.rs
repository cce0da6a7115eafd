//! Polls the server status twice to show ETag revalidation.
//!
//! The second call is sent with `If-None-Match` and, when ESI answers `304 Not Modified`, is
//! served from the cache. Run with tracing enabled:
//! ```sh
//! RUST_LOG=debug,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example status --features tracing
//! ```
//!
//! Settings are read from `./esi.json` (or `$ESI_CONFIG_PATH`), which is created on first run.

use esi_client::{Client, Config};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::new(Config::default())?;

    for attempt in 1..=2 {
        match client.status().status().await {
            Ok(status) => info!(
                attempt,
                players = %status.data["players"],
                server_version = %status.data["server_version"],
                etag = status.etag().unwrap_or_default(),
            ),
            Err(e) => error!(attempt, error = %e),
        }
    }

    let stats = client.util().cache_stats();
    for entry in &stats.entries {
        info!(key = %entry.key, etag = %entry.etag, age = %entry.age, "cached");
    }

    Ok(())
}
