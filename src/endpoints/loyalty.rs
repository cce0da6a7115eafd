use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Loyalty<'client> {
    client: &'client Client,
}

impl<'client> Loyalty<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Loyalty store offers of an NPC corporation.
    pub async fn offers(&self, corporation_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("loyalty/stores/{corporation_id}/offers"),
            None,
        )
        .await
    }
}
