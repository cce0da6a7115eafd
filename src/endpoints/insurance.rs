use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Insurance<'client> {
    client: &'client Client,
}

impl<'client> Insurance<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Insurance levels for all ship types.
    pub async fn prices(&self) -> Result<Response> {
        get(self.client, "insurance/prices".to_owned(), None).await
    }
}
