use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct PlanetaryInteraction<'client> {
    client: &'client Client,
}

impl<'client> PlanetaryInteraction<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Cycle time and inputs of a production schematic.
    pub async fn schematic(&self, schematic_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("universe/schematics/{schematic_id}"),
            None,
        )
        .await
    }
}
