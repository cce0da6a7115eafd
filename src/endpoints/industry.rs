use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Industry<'client> {
    client: &'client Client,
}

impl<'client> Industry<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Public industry facilities.
    pub async fn facilities(&self) -> Result<Response> {
        get(self.client, "industry/facilities".to_owned(), None).await
    }

    /// Cost indices for solar systems.
    pub async fn systems(&self) -> Result<Response> {
        get(self.client, "industry/systems".to_owned(), None).await
    }
}
