use serde_json::json;

use super::{FIRST_PAGE, get};
use crate::Result;
use crate::client::Client;
use crate::response::Response;
use crate::validation;

/// Order types accepted by [`Market::orders`].
pub const ORDER_TYPES: [&str; 3] = ["all", "sell", "buy"];

#[derive(Clone, Copy, Debug)]
pub struct Market<'client> {
    client: &'client Client,
}

impl<'client> Market<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn groups(&self) -> MarketGroups<'client> {
        MarketGroups {
            client: self.client,
        }
    }

    /// Daily price history of a type in a region.
    pub async fn history(&self, region_id: i64, type_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("markets/{region_id}/history"),
            Some(json!({ "type_id": type_id })),
        )
        .await
    }

    /// Orders in a region, optionally for a single type.
    ///
    /// `order_type` must be one of [`ORDER_TYPES`]; anything else is rejected with
    /// [`Kind::InvalidChoice`](crate::error::Kind::InvalidChoice) before a request is made.
    pub async fn orders(
        &self,
        region_id: i64,
        type_id: Option<i64>,
        order_type: &str,
        page: Option<u32>,
    ) -> Result<Response> {
        validation::choice(
            order_type,
            &ORDER_TYPES,
            "market.orders order_type must be 'all', 'sell', or 'buy'",
        )?;

        get(
            self.client,
            format!("markets/{region_id}/orders"),
            Some(json!({
                "order_type": order_type,
                "page": page.unwrap_or(FIRST_PAGE),
                "type_id": type_id,
            })),
        )
        .await
    }

    /// Average and adjusted prices of every type.
    pub async fn prices(&self) -> Result<Response> {
        get(self.client, "markets/prices".to_owned(), None).await
    }

    /// Type IDs with active orders in a region.
    pub async fn types(&self, region_id: i64, page: Option<u32>) -> Result<Response> {
        get(
            self.client,
            format!("markets/{region_id}/types"),
            Some(json!({ "page": page.unwrap_or(FIRST_PAGE) })),
        )
        .await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MarketGroups<'client> {
    client: &'client Client,
}

impl MarketGroups<'_> {
    pub async fn group(&self, market_group_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("markets/groups/{market_group_id}"),
            None,
        )
        .await
    }

    pub async fn groups(&self) -> Result<Response> {
        get(self.client, "markets/groups".to_owned(), None).await
    }
}
