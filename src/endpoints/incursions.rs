use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Incursions<'client> {
    client: &'client Client,
}

impl<'client> Incursions<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Active incursions.
    pub async fn incursions(&self) -> Result<Response> {
        get(self.client, "incursions".to_owned(), None).await
    }
}
