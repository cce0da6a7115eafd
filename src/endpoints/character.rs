//! Characters and everything that hangs off `characters/{character_id}`.

use serde_json::json;

use super::{FIRST_PAGE, NO_BODY, get, get_authed, send};
use crate::Result;
use crate::client::Client;
use crate::request::Method;
use crate::response::Response;
use crate::validation;

/// Answers accepted by [`Calendar::respond`].
pub const EVENT_RESPONSES: [&str; 3] = ["accepted", "declined", "tentative"];

#[derive(Clone, Copy, Debug)]
pub struct Character<'client> {
    client: &'client Client,
}

impl<'client> Character<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Corporation, alliance, and faction IDs for each character. All characters must exist,
    /// or none are returned.
    pub async fn affiliation(&self, character_ids: &[i64]) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            "characters/affiliation".to_owned(),
            Some(character_ids),
            None,
            false,
        )
        .await
    }

    /// Corporations the character has been a member of.
    pub async fn corp_history(&self, character_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("characters/{character_id}/corporationhistory"),
            None,
        )
        .await
    }

    pub async fn portrait(&self, character_id: i64) -> Result<Response> {
        get(
            self.client,
            format!("characters/{character_id}/portrait"),
            None,
        )
        .await
    }

    pub async fn info(&self, character_id: i64) -> Result<Response> {
        get(self.client, format!("characters/{character_id}"), None).await
    }

    /// Requires auth.
    pub async fn agents_research(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/agents_research"),
            None,
        )
        .await
    }

    /// Requires auth.
    pub async fn blueprints(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/blueprints"),
            None,
        )
        .await
    }

    /// CONCORD Spam Prevention Act charge for mailing `characters`. Requires auth.
    pub async fn cspa(&self, character_id: i64, characters: &[i64]) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            format!("characters/{character_id}/cspa"),
            Some(characters),
            None,
            true,
        )
        .await
    }

    /// Jump activation and fatigue. Requires auth.
    pub async fn fatigue(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/fatigue"),
            None,
        )
        .await
    }

    /// Requires auth.
    pub async fn medals(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/medals"),
            None,
        )
        .await
    }

    /// Corporation roles. Requires auth.
    pub async fn roles(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/roles"),
            None,
        )
        .await
    }

    /// Standings from agents, NPC corporations, and factions. Requires auth.
    pub async fn standings(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/standings"),
            None,
        )
        .await
    }

    /// Yearly aggregate stats. Requires auth.
    pub async fn stats(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/stats"),
            None,
        )
        .await
    }

    /// Corporation titles. Requires auth.
    pub async fn titles(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/titles"),
            None,
        )
        .await
    }

    #[must_use]
    pub fn assets(&self) -> Assets<'client> {
        Assets {
            client: self.client,
        }
    }

    #[must_use]
    pub fn bookmarks(&self) -> Bookmarks<'client> {
        Bookmarks {
            client: self.client,
        }
    }

    #[must_use]
    pub fn calendar(&self) -> Calendar<'client> {
        Calendar {
            client: self.client,
        }
    }

    #[must_use]
    pub fn clones(&self) -> Clones<'client> {
        Clones {
            client: self.client,
        }
    }

    #[must_use]
    pub fn contacts(&self) -> Contacts<'client> {
        Contacts {
            client: self.client,
        }
    }

    #[must_use]
    pub fn contracts(&self) -> CharacterContracts<'client> {
        CharacterContracts {
            client: self.client,
        }
    }

    #[must_use]
    pub fn industry(&self) -> CharacterIndustry<'client> {
        CharacterIndustry {
            client: self.client,
        }
    }
}

/// Requires auth (`esi-assets.read_assets.v1`).
#[derive(Clone, Copy, Debug)]
pub struct Assets<'client> {
    client: &'client Client,
}

impl Assets<'_> {
    pub async fn assets(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/assets"),
            None,
        )
        .await
    }

    /// Locations for item IDs taken from [`Assets::assets`].
    pub async fn locations(&self, character_id: i64, item_ids: &[i64]) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            format!("characters/{character_id}/assets/locations"),
            Some(item_ids),
            None,
            true,
        )
        .await
    }

    /// Names for item IDs taken from [`Assets::assets`].
    pub async fn names(&self, character_id: i64, item_ids: &[i64]) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            format!("characters/{character_id}/assets/names"),
            Some(item_ids),
            None,
            true,
        )
        .await
    }
}

/// Requires auth (`esi-bookmarks.read_character_bookmarks.v1`).
#[derive(Clone, Copy, Debug)]
pub struct Bookmarks<'client> {
    client: &'client Client,
}

impl Bookmarks<'_> {
    pub async fn bookmarks(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/bookmarks"),
            None,
        )
        .await
    }

    pub async fn folders(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/bookmarks/folders"),
            None,
        )
        .await
    }
}

/// Requires auth (`esi-calendar.*`).
#[derive(Clone, Copy, Debug)]
pub struct Calendar<'client> {
    client: &'client Client,
}

impl Calendar<'_> {
    /// Up to 50 event summaries, starting after `from_event` when given.
    pub async fn calendar(&self, character_id: i64, from_event: Option<i64>) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/calendar"),
            Some(json!({ "from_event": from_event })),
        )
        .await
    }

    pub async fn event(&self, character_id: i64, event_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/calendar/{event_id}"),
            None,
        )
        .await
    }

    /// Sets the character's response to an event, one of [`EVENT_RESPONSES`].
    pub async fn respond(
        &self,
        character_id: i64,
        event_id: i64,
        response: &str,
    ) -> Result<Response> {
        validation::choice(
            response,
            &EVENT_RESPONSES,
            "calendar.respond response must be 'accepted', 'declined' or 'tentative'",
        )?;

        send(
            self.client,
            Method::Put,
            format!("characters/{character_id}/calendar/{event_id}"),
            Some(&json!({ "response": response })),
            None,
            true,
        )
        .await
    }

    pub async fn attendees(&self, character_id: i64, event_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/calendar/{event_id}/attendees"),
            None,
        )
        .await
    }
}

/// Requires auth (`esi-clones.*`).
#[derive(Clone, Copy, Debug)]
pub struct Clones<'client> {
    client: &'client Client,
}

impl Clones<'_> {
    pub async fn clones(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/clones"),
            None,
        )
        .await
    }

    /// Implants in the active clone.
    pub async fn implants(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/implants"),
            None,
        )
        .await
    }
}

/// Requires auth (`esi-characters.read_contacts.v1`, `esi-characters.write_contacts.v1`).
#[derive(Clone, Copy, Debug)]
pub struct Contacts<'client> {
    client: &'client Client,
}

impl Contacts<'_> {
    pub async fn contacts(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/contacts"),
            None,
        )
        .await
    }

    /// Adds `contact_ids` with the same `standing` (-10 to 10).
    pub async fn add(
        &self,
        character_id: i64,
        contact_ids: &[i64],
        standing: f64,
    ) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            format!("characters/{character_id}/contacts"),
            Some(contact_ids),
            Some(json!({ "standing": standing })),
            true,
        )
        .await
    }

    pub async fn delete(&self, character_id: i64, contact_ids: &[i64]) -> Result<Response> {
        send(
            self.client,
            Method::Delete,
            format!("characters/{character_id}/contacts"),
            NO_BODY,
            Some(json!({ "contact_ids": contact_ids })),
            true,
        )
        .await
    }

    /// Sets the same `standing` on every contact in `contact_ids`.
    pub async fn edit(
        &self,
        character_id: i64,
        contact_ids: &[i64],
        standing: f64,
    ) -> Result<Response> {
        send(
            self.client,
            Method::Put,
            format!("characters/{character_id}/contacts"),
            Some(contact_ids),
            Some(json!({ "standing": standing })),
            true,
        )
        .await
    }
}

/// Contracts where the character is issuer, acceptor, or assignee. Requires auth.
#[derive(Clone, Copy, Debug)]
pub struct CharacterContracts<'client> {
    client: &'client Client,
}

impl CharacterContracts<'_> {
    pub async fn contracts(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/contracts"),
            None,
        )
        .await
    }

    /// Bids on an auction contract.
    pub async fn bids(&self, character_id: i64, contract_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/contracts/{contract_id}/bids"),
            None,
        )
        .await
    }

    pub async fn items(&self, character_id: i64, contract_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/contracts/{contract_id}/items"),
            None,
        )
        .await
    }
}

/// Requires auth (`esi-industry.*`).
#[derive(Clone, Copy, Debug)]
pub struct CharacterIndustry<'client> {
    client: &'client Client,
}

impl CharacterIndustry<'_> {
    pub async fn jobs(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/industry/jobs"),
            None,
        )
        .await
    }

    /// Mining ledger for the past 30 days.
    pub async fn mining(&self, character_id: i64, page: Option<u32>) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/mining"),
            Some(json!({ "page": page.unwrap_or(FIRST_PAGE) })),
        )
        .await
    }
}
