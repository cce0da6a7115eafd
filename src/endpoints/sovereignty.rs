use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Sovereignty<'client> {
    client: &'client Client,
}

impl<'client> Sovereignty<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    pub async fn campaigns(&self) -> Result<Response> {
        get(self.client, "sovereignty/campaigns".to_owned(), None).await
    }

    /// Sovereignty holder of every system.
    pub async fn map(&self) -> Result<Response> {
        get(self.client, "sovereignty/map".to_owned(), None).await
    }

    pub async fn structures(&self) -> Result<Response> {
        get(self.client, "sovereignty/structures".to_owned(), None).await
    }
}
