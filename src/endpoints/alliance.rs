use super::{get, get_authed};
use crate::Result;
use crate::client::Client;
use crate::response::Response;

/// Player alliances.
#[derive(Clone, Copy, Debug)]
pub struct Alliance<'client> {
    client: &'client Client,
}

impl<'client> Alliance<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// IDs of all active player alliances.
    pub async fn alliances(&self) -> Result<Response> {
        get(self.client, "alliances".to_owned(), None).await
    }

    /// Current member corporations of an alliance.
    pub async fn corps(&self, alliance_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("alliances/{alliance_id}/corporations"),
            None,
        )
        .await
    }

    pub async fn icon(&self, alliance_id: i64) -> Result<Response> {
        get(self.client, format!("alliances/{alliance_id}/icons"), None).await
    }

    /// Public information about an alliance.
    pub async fn info(&self, alliance_id: i64) -> Result<Response> {
        get(self.client, format!("alliances/{alliance_id}"), None).await
    }

    #[must_use]
    pub fn contacts(&self) -> AllianceContacts<'client> {
        AllianceContacts {
            client: self.client,
        }
    }
}

/// Requires auth (`esi-alliances.read_contacts.v1`).
#[derive(Clone, Copy, Debug)]
pub struct AllianceContacts<'client> {
    client: &'client Client,
}

impl AllianceContacts<'_> {
    pub async fn contacts(&self, alliance_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("alliances/{alliance_id}/contacts"),
            None,
        )
        .await
    }

    pub async fn labels(&self, alliance_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("alliances/{alliance_id}/contacts/labels"),
            None,
        )
        .await
    }
}
