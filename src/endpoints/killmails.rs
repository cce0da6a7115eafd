use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Killmails<'client> {
    client: &'client Client,
}

impl<'client> Killmails<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// A single killmail, addressed by its ID and hash.
    pub async fn info(&self, killmail_id: i64, killmail_hash: &str) -> Result<Response> {
        get(
            self.client,
            format!("killmails/{killmail_id}/{killmail_hash}"),
            None,
        )
        .await
    }
}
