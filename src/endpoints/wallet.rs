use serde_json::json;

use super::{FIRST_PAGE, get_authed};
use crate::Result;
use crate::client::Client;
use crate::response::Response;

/// Requires auth (`esi-wallet.*`).
#[derive(Clone, Copy, Debug)]
pub struct Wallet<'client> {
    client: &'client Client,
}

impl<'client> Wallet<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn character(&self) -> CharacterWallet<'client> {
        CharacterWallet {
            client: self.client,
        }
    }

    #[must_use]
    pub fn corporation(&self) -> CorporationWallet<'client> {
        CorporationWallet {
            client: self.client,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CharacterWallet<'client> {
    client: &'client Client,
}

impl CharacterWallet<'_> {
    pub async fn balance(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/wallet"),
            None,
        )
        .await
    }

    /// Journal entries of the last 30 days.
    pub async fn journal(&self, character_id: i64, page: Option<u32>) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/wallet/journal"),
            Some(json!({ "page": page.unwrap_or(FIRST_PAGE) })),
        )
        .await
    }

    /// Market transactions, older than `from_id` when given.
    pub async fn transactions(&self, character_id: i64, from_id: Option<i64>) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/wallet/transactions"),
            Some(json!({ "from_id": from_id })),
        )
        .await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CorporationWallet<'client> {
    client: &'client Client,
}

impl CorporationWallet<'_> {
    /// Balances of every wallet division.
    pub async fn wallets(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/wallets"),
            None,
        )
        .await
    }

    pub async fn journal(
        &self,
        corporation_id: i64,
        division: u8,
        page: Option<u32>,
    ) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/wallets/{division}/journal"),
            Some(json!({ "page": page.unwrap_or(FIRST_PAGE) })),
        )
        .await
    }

    pub async fn transactions(
        &self,
        corporation_id: i64,
        division: u8,
        from_id: Option<i64>,
    ) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/wallets/{division}/transactions"),
            Some(json!({ "from_id": from_id })),
        )
        .await
    }
}
