use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Status<'client> {
    client: &'client Client,
}

impl<'client> Status<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Tranquility server status: players online, version, and start time.
    pub async fn status(&self) -> Result<Response> {
        get(self.client, "status".to_owned(), None).await
    }
}
