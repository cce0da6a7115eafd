use super::{get, get_authed};
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct FactionWarfare<'client> {
    client: &'client Client,
}

impl<'client> FactionWarfare<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn leaderboards(&self) -> Leaderboards<'client> {
        Leaderboards {
            client: self.client,
        }
    }

    #[must_use]
    pub fn stats(&self) -> Stats<'client> {
        Stats {
            client: self.client,
        }
    }

    /// Ownership and contest status of every faction warfare system.
    pub async fn systems(&self) -> Result<Response> {
        get(self.client, "fw/systems".to_owned(), None).await
    }

    /// Factions at war with each other.
    pub async fn wars(&self) -> Result<Response> {
        get(self.client, "fw/wars".to_owned(), None).await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Leaderboards<'client> {
    client: &'client Client,
}

impl Leaderboards<'_> {
    pub async fn characters(&self) -> Result<Response> {
        get(self.client, "fw/leaderboards/characters".to_owned(), None).await
    }

    pub async fn corporations(&self) -> Result<Response> {
        get(self.client, "fw/leaderboards/corporations".to_owned(), None).await
    }

    /// Faction leaderboard.
    pub async fn leaderboard(&self) -> Result<Response> {
        get(self.client, "fw/leaderboards".to_owned(), None).await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Stats<'client> {
    client: &'client Client,
}

impl Stats<'_> {
    /// Per-faction statistics.
    pub async fn stats(&self) -> Result<Response> {
        get(self.client, "fw/stats".to_owned(), None).await
    }

    /// Requires auth.
    pub async fn character(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/fw/stats"),
            None,
        )
        .await
    }

    /// Requires auth.
    pub async fn corporation(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/fw/stats"),
            None,
        )
        .await
    }
}
