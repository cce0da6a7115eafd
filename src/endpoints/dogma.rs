use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

/// Dogma attributes and effects.
#[derive(Clone, Copy, Debug)]
pub struct Dogma<'client> {
    client: &'client Client,
}

impl<'client> Dogma<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    pub async fn attribute(&self, attribute_id: i64) -> Result<Response> {
        get(self.client, format!("dogma/attributes/{attribute_id}"), None).await
    }

    pub async fn attributes(&self) -> Result<Response> {
        get(self.client, "dogma/attributes".to_owned(), None).await
    }

    /// Info about a mutated (abyssal) item.
    pub async fn dynamic_item(&self, item_id: i64, type_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("dogma/dynamic/items/{type_id}/{item_id}"),
            None,
        )
        .await
    }

    pub async fn effect(&self, effect_id: i64) -> Result<Response> {
        get(self.client, format!("dogma/effects/{effect_id}"), None).await
    }

    pub async fn effects(&self) -> Result<Response> {
        get(self.client, "dogma/effects".to_owned(), None).await
    }
}
