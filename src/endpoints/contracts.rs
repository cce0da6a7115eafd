use serde_json::json;

use super::{FIRST_PAGE, get};
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Contracts<'client> {
    client: &'client Client,
}

impl<'client> Contracts<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn public(&self) -> PublicContracts<'client> {
        PublicContracts {
            client: self.client,
        }
    }
}

/// Public contracts, paged. `page` defaults to the first page.
#[derive(Clone, Copy, Debug)]
pub struct PublicContracts<'client> {
    client: &'client Client,
}

impl PublicContracts<'_> {
    /// Bids on a public auction contract.
    pub async fn bids(&self, contract_id: i64, page: Option<u32>) -> Result<Response> {
        get(
            self.client,
            format!("contracts/public/bids/{contract_id}"),
            Some(json!({ "page": page.unwrap_or(FIRST_PAGE) })),
        )
        .await
    }

    /// Public contracts in a region.
    pub async fn contracts(&self, region_id: i64, page: Option<u32>) -> Result<Response> {
        get(
            self.client,
            format!("contracts/public/{region_id}"),
            Some(json!({ "page": page.unwrap_or(FIRST_PAGE) })),
        )
        .await
    }

    pub async fn items(&self, contract_id: i64, page: Option<u32>) -> Result<Response> {
        get(
            self.client,
            format!("contracts/public/items/{contract_id}"),
            Some(json!({ "page": page.unwrap_or(FIRST_PAGE) })),
        )
        .await
    }
}
