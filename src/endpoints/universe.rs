//! Static and live universe data.

use super::{get, get_authed, send};
use crate::Result;
use crate::client::Client;
use crate::request::Method;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Universe<'client> {
    client: &'client Client,
}

impl<'client> Universe<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    pub async fn ancestries(&self) -> Result<Response> {
        get(self.client, "universe/ancestries".to_owned(), None).await
    }

    /// An asteroid belt.
    pub async fn belt(&self, asteroid_belt_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("universe/asteroid_belts/{asteroid_belt_id}"),
            None,
        )
        .await
    }

    pub async fn bloodlines(&self) -> Result<Response> {
        get(self.client, "universe/bloodlines".to_owned(), None).await
    }

    #[must_use]
    pub fn bulk(&self) -> Bulk<'client> {
        Bulk {
            client: self.client,
        }
    }

    pub async fn categories(&self) -> Result<Response> {
        get(self.client, "universe/categories".to_owned(), None).await
    }

    pub async fn category(&self, category_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("universe/categories/{category_id}"),
            None,
        )
        .await
    }

    pub async fn constellation(&self, constellation_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("universe/constellations/{constellation_id}"),
            None,
        )
        .await
    }

    pub async fn constellations(&self) -> Result<Response> {
        get(self.client, "universe/constellations".to_owned(), None).await
    }

    pub async fn factions(&self) -> Result<Response> {
        get(self.client, "universe/factions".to_owned(), None).await
    }

    pub async fn graphic(&self, graphic_id: i64) -> Result<Response> {
        get(self.client, format!("universe/graphics/{graphic_id}"), None).await
    }

    pub async fn graphics(&self) -> Result<Response> {
        get(self.client, "universe/graphics".to_owned(), None).await
    }

    /// An item group.
    pub async fn group(&self, group_id: i64) -> Result<Response> {
        get(self.client, format!("universe/groups/{group_id}"), None).await
    }

    pub async fn groups(&self) -> Result<Response> {
        get(self.client, "universe/groups".to_owned(), None).await
    }

    pub async fn moon(&self, moon_id: i64) -> Result<Response> {
        get(self.client, format!("universe/moons/{moon_id}"), None).await
    }

    pub async fn planet(&self, planet_id: i64) -> Result<Response> {
        get(self.client, format!("universe/planets/{planet_id}"), None).await
    }

    pub async fn races(&self) -> Result<Response> {
        get(self.client, "universe/races".to_owned(), None).await
    }

    pub async fn region(&self, region_id: i64) -> Result<Response> {
        get(self.client, format!("universe/regions/{region_id}"), None).await
    }

    pub async fn regions(&self) -> Result<Response> {
        get(self.client, "universe/regions".to_owned(), None).await
    }

    pub async fn stargate(&self, stargate_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("universe/stargates/{stargate_id}"),
            None,
        )
        .await
    }

    pub async fn star(&self, star_id: i64) -> Result<Response> {
        get(self.client, format!("universe/stars/{star_id}"), None).await
    }

    pub async fn station(&self, station_id: i64) -> Result<Response> {
        get(self.client, format!("universe/stations/{station_id}"), None).await
    }

    #[must_use]
    pub fn structures(&self) -> Structures<'client> {
        Structures {
            client: self.client,
        }
    }

    #[must_use]
    pub fn systems(&self) -> Systems<'client> {
        Systems {
            client: self.client,
        }
    }

    #[must_use]
    pub fn types(&self) -> Types<'client> {
        Types {
            client: self.client,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Bulk<'client> {
    client: &'client Client,
}

impl Bulk<'_> {
    /// Names and categories for a set of IDs.
    pub async fn ids_to_names(&self, ids: &[i64]) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            "universe/names".to_owned(),
            Some(ids),
            None,
            false,
        )
        .await
    }

    /// Resolves exact names to IDs, grouped by category.
    pub async fn names_to_ids(&self, names: &[&str]) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            "universe/ids".to_owned(),
            Some(names),
            None,
            false,
        )
        .await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Structures<'client> {
    client: &'client Client,
}

impl Structures<'_> {
    /// Public player-owned structures.
    pub async fn structures(&self) -> Result<Response> {
        get(self.client, "universe/structures".to_owned(), None).await
    }

    /// Requires auth (`esi-universe.read_structures.v1`).
    pub async fn structure(&self, structure_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("universe/structures/{structure_id}"),
            None,
        )
        .await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Systems<'client> {
    client: &'client Client,
}

impl Systems<'_> {
    pub async fn system(&self, system_id: i64) -> Result<Response> {
        get(self.client, format!("universe/systems/{system_id}"), None).await
    }

    /// Ship jumps per system over the last hour.
    pub async fn jumps(&self) -> Result<Response> {
        get(self.client, "universe/system_jumps".to_owned(), None).await
    }

    /// Ship, pod, and NPC kills per system over the last hour.
    pub async fn kills(&self) -> Result<Response> {
        get(self.client, "universe/system_kills".to_owned(), None).await
    }

    pub async fn systems(&self) -> Result<Response> {
        get(self.client, "universe/systems".to_owned(), None).await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Types<'client> {
    client: &'client Client,
}

impl Types<'_> {
    pub async fn type_info(&self, type_id: i64) -> Result<Response> {
        get(self.client, format!("universe/types/{type_id}"), None).await
    }

    /// Type IDs, first page.
    pub async fn types(&self) -> Result<Response> {
        get(self.client, "universe/types".to_owned(), None).await
    }
}
