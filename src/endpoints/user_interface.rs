//! Opens windows and sets waypoints in a running game client. Requires auth (`esi-ui.*`).

use bon::Builder;
use serde::Serialize;
use serde_json::json;

use super::{NO_BODY, send};
use crate::Result;
use crate::client::Client;
use crate::request::Method;
use crate::response::Response;

/// Pre-filled "new mail" window.
#[non_exhaustive]
#[derive(Clone, Debug, Builder, Serialize)]
#[builder(on(String, into))]
pub struct NewMailWindow {
    pub recipients: Vec<i64>,
    pub subject: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_corp_or_alliance_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_mailing_list_id: Option<i64>,
}

#[derive(Clone, Copy, Debug)]
pub struct UserInterface<'client> {
    client: &'client Client,
}

impl<'client> UserInterface<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn autopilot(&self) -> Autopilot<'client> {
        Autopilot {
            client: self.client,
        }
    }

    #[must_use]
    pub fn open_window(&self) -> OpenWindow<'client> {
        OpenWindow {
            client: self.client,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Autopilot<'client> {
    client: &'client Client,
}

impl Autopilot<'_> {
    /// Adds `destination_id` to the autopilot route.
    pub async fn waypoint(
        &self,
        destination_id: i64,
        add_to_beginning: bool,
        clear_other_waypoints: bool,
    ) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            "ui/autopilot/waypoint".to_owned(),
            NO_BODY,
            Some(json!({
                "add_to_beginning": add_to_beginning,
                "clear_other_waypoints": clear_other_waypoints,
                "destination_id": destination_id,
            })),
            true,
        )
        .await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OpenWindow<'client> {
    client: &'client Client,
}

impl OpenWindow<'_> {
    pub async fn contract(&self, contract_id: i64) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            "ui/openwindow/contract".to_owned(),
            NO_BODY,
            Some(json!({ "contract_id": contract_id })),
            true,
        )
        .await
    }

    /// Show-info window for a character, corporation, or alliance.
    pub async fn information(&self, target_id: i64) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            "ui/openwindow/information".to_owned(),
            NO_BODY,
            Some(json!({ "target_id": target_id })),
            true,
        )
        .await
    }

    pub async fn market_details(&self, type_id: i64) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            "ui/openwindow/marketdetails".to_owned(),
            NO_BODY,
            Some(json!({ "type_id": type_id })),
            true,
        )
        .await
    }

    pub async fn new_mail(&self, mail: &NewMailWindow) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            "ui/openwindow/newmail".to_owned(),
            Some(mail),
            None,
            true,
        )
        .await
    }
}
