use serde_json::json;

use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;
use crate::validation;

/// Flags accepted by [`Routes::plan`].
pub const ROUTE_FLAGS: [&str; 3] = ["shortest", "secure", "insecure"];

#[derive(Clone, Copy, Debug)]
pub struct Routes<'client> {
    client: &'client Client,
}

impl<'client> Routes<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Solar system IDs on the route from `origin` to `destination`, avoiding `avoid`.
    ///
    /// `flag` must be one of [`ROUTE_FLAGS`].
    pub async fn plan(
        &self,
        origin: i64,
        destination: i64,
        flag: &str,
        avoid: &[i64],
    ) -> Result<Response> {
        validation::choice(
            flag,
            &ROUTE_FLAGS,
            "routes.plan flag must be 'shortest', 'secure', or 'insecure'",
        )?;

        let avoid = (!avoid.is_empty()).then_some(avoid);
        get(
            self.client,
            format!("route/{origin}/{destination}"),
            Some(json!({ "avoid": avoid, "flag": flag })),
        )
        .await
    }
}
