use super::get_authed;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

/// Requires auth (`esi-skills.*`).
#[derive(Clone, Copy, Debug)]
pub struct Skills<'client> {
    client: &'client Client,
}

impl<'client> Skills<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Trained skills and total skill points.
    pub async fn skills(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/skills"),
            None,
        )
        .await
    }

    pub async fn queue(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/skillqueue"),
            None,
        )
        .await
    }

    /// Attributes and remap availability.
    pub async fn attributes(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/attributes"),
            None,
        )
        .await
    }
}
