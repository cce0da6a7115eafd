use super::get_authed;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

/// Where a character is and what they fly. Requires auth.
#[derive(Clone, Copy, Debug)]
pub struct Location<'client> {
    client: &'client Client,
}

impl<'client> Location<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    pub async fn location(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/location"),
            None,
        )
        .await
    }

    /// The current ship.
    pub async fn ship(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/ship"),
            None,
        )
        .await
    }

    /// Online status and login history.
    pub async fn online(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/online"),
            None,
        )
        .await
    }
}
