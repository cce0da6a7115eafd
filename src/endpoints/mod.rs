//! ESI endpoints grouped by game domain.
//!
//! Every domain is a small accessor borrowing the [`Client`], obtained from the matching client
//! method, e.g. [`Client::character`]. Sub-domains hang off the accessor one level deep:
//!
//! ```no_run
//! use esi_client::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(Config::default())?;
//!
//! let info = client.character().info(2_112_625_428).await?;
//! let assets = client.character().assets().assets(2_112_625_428).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Endpoints that need a token are marked "Requires auth". Calling them without an `authToken`
//! in the settings fails with [`Kind::AuthRequired`](crate::error::Kind::AuthRequired) before
//! anything is sent.

pub mod alliance;
pub mod character;
pub mod contracts;
pub mod corporation;
pub mod dogma;
pub mod faction_warfare;
pub mod incursions;
pub mod industry;
pub mod insurance;
pub mod killmails;
pub mod location;
pub mod loyalty;
pub mod mail;
pub mod market;
pub mod opportunities;
pub mod planetary_interaction;
pub mod routes;
pub mod skills;
pub mod sovereignty;
pub mod status;
pub mod universe;
pub mod user_interface;
pub mod wallet;
pub mod wars;

pub use alliance::Alliance;
pub use character::Character;
pub use contracts::Contracts;
pub use corporation::Corporation;
pub use dogma::Dogma;
pub use faction_warfare::FactionWarfare;
pub use incursions::Incursions;
pub use industry::Industry;
pub use insurance::Insurance;
pub use killmails::Killmails;
pub use location::Location;
pub use loyalty::Loyalty;
pub use mail::Mail;
pub use market::Market;
pub use opportunities::Opportunities;
pub use planetary_interaction::PlanetaryInteraction;
pub use routes::Routes;
pub use skills::Skills;
pub use sovereignty::Sovereignty;
pub use status::Status;
pub use universe::Universe;
pub use user_interface::UserInterface;
pub use wallet::Wallet;
pub use wars::Wars;

use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::client::Client;
use crate::request::{Method, Request};
use crate::response::Response;

/// ESI's default first page.
pub(crate) const FIRST_PAGE: u32 = 1;

/// For [`send`] calls without a body.
pub(crate) const NO_BODY: Option<&Value> = None;

/// Public GET.
pub(crate) async fn get(client: &Client, path: String, query: Option<Value>) -> Result<Response> {
    client
        .execute(&Request::builder().path(path).maybe_query(query).build())
        .await
}

/// GET that requires a token.
pub(crate) async fn get_authed(
    client: &Client,
    path: String,
    query: Option<Value>,
) -> Result<Response> {
    client
        .execute(
            &Request::builder()
                .path(path)
                .maybe_query(query)
                .needs_auth(true)
                .build(),
        )
        .await
}

/// Any other verb. `body` is serialized as JSON.
pub(crate) async fn send<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    path: String,
    body: Option<&B>,
    query: Option<Value>,
    needs_auth: bool,
) -> Result<Response> {
    let body = body.map(serde_json::to_value).transpose()?;

    client
        .execute(
            &Request::builder()
                .path(path)
                .method(method)
                .maybe_body(body)
                .maybe_query(query)
                .needs_auth(needs_auth)
                .build(),
        )
        .await
}
