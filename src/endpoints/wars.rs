use serde_json::json;

use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Wars<'client> {
    client: &'client Client,
}

impl<'client> Wars<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    pub async fn war(&self, war_id: i64) -> Result<Response> {
        get(self.client, format!("wars/{war_id}"), None).await
    }

    /// Killmails related to a war.
    pub async fn killmails(&self, war_id: i64) -> Result<Response> {
        get(self.client, format!("wars/{war_id}/killmails"), None).await
    }

    /// War IDs in descending order, below `max_war_id` when given.
    pub async fn wars(&self, max_war_id: Option<i64>) -> Result<Response> {
        get(
            self.client,
            "wars".to_owned(),
            Some(json!({ "max_war_id": max_war_id })),
        )
        .await
    }
}
