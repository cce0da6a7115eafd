use serde_json::json;

use super::{FIRST_PAGE, get, get_authed};
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Corporation<'client> {
    client: &'client Client,
}

impl<'client> Corporation<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Alliances the corporation has been a member of.
    pub async fn alliance_history(&self, corporation_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("corporations/{corporation_id}/alliancehistory"),
            None,
        )
        .await
    }

    pub async fn icons(&self, corporation_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("corporations/{corporation_id}/icons"),
            None,
        )
        .await
    }

    pub async fn info(&self, corporation_id: i64) -> Result<Response> {
        get(self.client, format!("corporations/{corporation_id}"), None).await
    }

    pub async fn npc_corps(&self) -> Result<Response> {
        get(self.client, "corporations/npccorps".to_owned(), None).await
    }

    /// Requires auth.
    pub async fn blueprints(&self, corporation_id: i64, page: Option<u32>) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/blueprints"),
            Some(json!({ "page": page.unwrap_or(FIRST_PAGE) })),
        )
        .await
    }

    /// Audit log of secure containers. Requires auth.
    pub async fn container_logs(&self, corporation_id: i64, page: Option<u32>) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/containers/logs"),
            Some(json!({ "page": page.unwrap_or(FIRST_PAGE) })),
        )
        .await
    }

    /// Hangar and wallet division names. Requires auth.
    pub async fn divisions(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/divisions"),
            None,
        )
        .await
    }

    /// Industry facilities. Requires auth.
    pub async fn facilities(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/facilities"),
            None,
        )
        .await
    }

    #[must_use]
    pub fn medals(&self) -> Medals<'client> {
        Medals {
            client: self.client,
        }
    }

    #[must_use]
    pub fn members(&self) -> Members<'client> {
        Members {
            client: self.client,
        }
    }

    #[must_use]
    pub fn roles(&self) -> Roles<'client> {
        Roles {
            client: self.client,
        }
    }
}

/// Requires auth (`esi-corporations.read_medals.v1`).
#[derive(Clone, Copy, Debug)]
pub struct Medals<'client> {
    client: &'client Client,
}

impl Medals<'_> {
    pub async fn medals(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/medals"),
            None,
        )
        .await
    }

    /// Medals the corporation has handed out.
    pub async fn issued(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/medals/issued"),
            None,
        )
        .await
    }
}

/// Requires auth.
#[derive(Clone, Copy, Debug)]
pub struct Members<'client> {
    client: &'client Client,
}

impl Members<'_> {
    pub async fn members(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/members"),
            None,
        )
        .await
    }

    /// Maximum number of members.
    pub async fn limit(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/members/limit"),
            None,
        )
        .await
    }

    pub async fn titles(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/members/titles"),
            None,
        )
        .await
    }

    pub async fn tracking(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/membertracking"),
            None,
        )
        .await
    }
}

/// Requires auth (`esi-corporations.read_corporation_membership.v1`).
#[derive(Clone, Copy, Debug)]
pub struct Roles<'client> {
    client: &'client Client,
}

impl Roles<'_> {
    pub async fn roles(&self, corporation_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/roles"),
            None,
        )
        .await
    }

    pub async fn history(&self, corporation_id: i64, page: Option<u32>) -> Result<Response> {
        get_authed(
            self.client,
            format!("corporations/{corporation_id}/roles/history"),
            Some(json!({ "page": page.unwrap_or(FIRST_PAGE) })),
        )
        .await
    }
}
