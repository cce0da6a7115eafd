//! The ESI client and its request pipeline.
//!
//! # Example
//!
//! ```no_run
//! use esi_client::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(Config::default())?;
//!
//! let status = client.status().status().await?;
//! println!("{} pilots online", status.data["players"]);
//!
//! // Served from the ETag cache when ESI answers 304 Not Modified
//! let again = client.status().status().await?;
//! assert_eq!(status.data, again.data);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use bon::Builder;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONNECTION, ETAG, HeaderMap, HeaderValue,
    IF_NONE_MATCH, USER_AGENT,
};
use reqwest::{Client as ReqwestClient, StatusCode};
use secrecy::{ExposeSecret as _, SecretString};
use serde_json::Value;

use crate::Result;
use crate::cache::EtagCache;
use crate::endpoints::{
    Alliance, Character, Contracts, Corporation, Dogma, FactionWarfare, Incursions, Industry,
    Insurance, Killmails, Location, Loyalty, Mail, Market, Opportunities, PlanetaryInteraction,
    Routes, Skills, Sovereignty, Status, UserInterface, Universe, Wallet, Wars,
};
use crate::error::Error;
use crate::request::{Fingerprint, Method, Request, public_url, with_token};
use crate::response::Response;
use crate::settings::{Settings, SettingsStore, SettingsUpdate, default_path};
use crate::utility::Utility;

/// Product token sent in `User-Agent`.
pub const USER_AGENT_PREFIX: &str = concat!("esi-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`Client`]
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// Project configuration file. Defaults to [`default_path`].
    #[builder(into)]
    settings_path: Option<PathBuf>,
    /// Read when the project configuration is missing or malformed. Defaults to the `esi.json`
    /// bundled with this crate.
    #[builder(into)]
    fallback_path: Option<PathBuf>,
    /// Stored in the project configuration when the client is created.
    #[builder(into)]
    token: Option<SecretString>,
    /// Replaces the whole `User-Agent` header.
    #[builder(into)]
    user_agent: Option<String>,
    /// Do not create the project configuration file when it is missing.
    #[builder(default)]
    skip_bootstrap: bool,
}

#[derive(Debug)]
struct ClientInner {
    client: ReqwestClient,
    settings: SettingsStore,
    /// Shared with whoever handed it to [`Client::with_cache`].
    cache: Arc<EtagCache>,
    user_agent: Option<String>,
}

/// Client for the EVE Online ESI API.
///
/// Cloning is cheap; clones share the HTTP connection pool, the settings, and the ETag cache.
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    /// Creates a client with its own empty ETag cache.
    ///
    /// Unless [`Config`] says otherwise, this creates the project configuration file from the
    /// fallback when it does not exist yet, and persists `token` when one is given.
    pub fn new(config: Config) -> Result<Client> {
        Self::with_cache(config, Arc::new(EtagCache::new()))
    }

    /// Creates a client that reads and writes `cache`.
    pub fn with_cache(config: Config, cache: Arc<EtagCache>) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = ReqwestClient::builder().default_headers(headers).build()?;

        let settings = SettingsStore::new(
            config.settings_path.unwrap_or_else(default_path),
            config.fallback_path,
        );

        if !config.skip_bootstrap {
            settings.bootstrap()?;
        }

        if let Some(token) = config.token {
            settings.set(&SettingsUpdate::builder().auth_token(token).build())?;
        }

        Ok(Self {
            inner: Arc::new(ClientInner {
                client,
                settings,
                cache,
                user_agent: config.user_agent,
            }),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsStore {
        &self.inner.settings
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<EtagCache> {
        &self.inner.cache
    }

    /// Issues `request` against the configured route.
    ///
    /// GET responses carrying an `ETag` are cached; the next identical GET is sent with
    /// `If-None-Match` and a `304 Not Modified` answer returns the cached response unchanged.
    /// An authenticated request without a configured token fails before any network activity.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip(self, request),
            fields(
                method = %request.method,
                path = %request.path,
                status_code
            )
        )
    )]
    pub async fn execute(&self, request: &Request) -> Result<Response> {
        let settings = self.inner.settings.get()?;

        let token = if request.needs_auth {
            let Some(token) = settings.auth_token() else {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    path = %request.path,
                    "authenticated endpoint called without a token"
                );
                return Err(Error::auth_required());
            };
            Some(token.clone())
        } else {
            None
        };

        let query = request.query_members()?;
        let url = public_url(&settings, &request.path, query.as_ref())?;
        let fingerprint = Fingerprint::new(
            request.method,
            &url,
            request.needs_auth,
            query.as_ref(),
            request.body.as_ref(),
        );

        let cached = if request.method == Method::Get {
            self.inner.cache.lookup(fingerprint.as_str())
        } else {
            None
        };

        let mut headers = self.headers(&settings, token.as_ref())?;
        if let Some(entry) = &cached {
            headers.insert(IF_NONE_MATCH, HeaderValue::from_str(&entry.etag)?);
        }

        let dispatched = match &token {
            Some(token) => with_token(&url, token.expose_secret())?,
            None => url.clone(),
        };

        let mut builder = self
            .inner
            .client
            .request(request.method.into(), dispatched)
            .headers(headers);
        if request.method != Method::Get
            && let Some(body) = &request.body
        {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::transport(&url, e.without_url()))?;
        let status_code = response.status();

        #[cfg(feature = "tracing")]
        tracing::Span::current().record("status_code", status_code.as_u16());

        let response_headers = response.headers().clone();

        if status_code == StatusCode::NOT_MODIFIED && request.method == Method::Get {
            if let Some(entry) = cached {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    url = %url,
                    etag = %entry.etag,
                    "not modified, serving cached response"
                );
                return Ok(entry.response);
            }

            #[cfg(feature = "tracing")]
            tracing::warn!(
                url = %url,
                "not modified but the cache entry is gone, returning no data"
            );
            return Ok(Response::from_headers(&response_headers, Value::Null));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::transport(&url, e.without_url()))?;
        let data = decode(&bytes);

        if !status_code.is_success() {
            let message = data
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .or_else(|| status_code.canonical_reason().map(str::to_owned))
                .unwrap_or_else(|| status_code.as_str().to_owned());

            #[cfg(feature = "tracing")]
            tracing::warn!(
                status = %status_code,
                method = %request.method,
                url = %url,
                message = %message,
                "ESI request failed"
            );

            return Err(Error::remote(status_code, request.method, url, message));
        }

        let normalized = Response::from_headers(&response_headers, data);

        if request.method == Method::Get
            && let Some(etag) = response_headers.get(ETAG).and_then(|v| v.to_str().ok())
        {
            self.inner
                .cache
                .store(fingerprint.into_string(), etag, normalized.clone());
        }

        Ok(normalized)
    }

    fn headers(&self, settings: &Settings, token: Option<&SecretString>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let user_agent = match &self.inner.user_agent {
            Some(user_agent) => user_agent.clone(),
            None if settings.project_name.is_empty() => USER_AGENT_PREFIX.to_owned(),
            None => format!("{USER_AGENT_PREFIX} (for: {})", settings.project_name),
        };
        headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent)?);

        if !settings.language.is_empty() {
            headers.insert(
                ACCEPT_LANGUAGE,
                HeaderValue::from_str(&settings.language.replace('/', "-"))?,
            );
        }

        if let Some(token) = token {
            let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
            bearer.set_sensitive(true);
            headers.insert(AUTHORIZATION, bearer);
        }

        Ok(headers)
    }

    #[must_use]
    pub fn alliance(&self) -> Alliance<'_> {
        Alliance::new(self)
    }

    #[must_use]
    pub fn character(&self) -> Character<'_> {
        Character::new(self)
    }

    #[must_use]
    pub fn contracts(&self) -> Contracts<'_> {
        Contracts::new(self)
    }

    #[must_use]
    pub fn corporation(&self) -> Corporation<'_> {
        Corporation::new(self)
    }

    #[must_use]
    pub fn dogma(&self) -> Dogma<'_> {
        Dogma::new(self)
    }

    /// Faction warfare.
    #[must_use]
    pub fn fw(&self) -> FactionWarfare<'_> {
        FactionWarfare::new(self)
    }

    #[must_use]
    pub fn incursions(&self) -> Incursions<'_> {
        Incursions::new(self)
    }

    #[must_use]
    pub fn industry(&self) -> Industry<'_> {
        Industry::new(self)
    }

    #[must_use]
    pub fn insurance(&self) -> Insurance<'_> {
        Insurance::new(self)
    }

    #[must_use]
    pub fn killmails(&self) -> Killmails<'_> {
        Killmails::new(self)
    }

    #[must_use]
    pub fn location(&self) -> Location<'_> {
        Location::new(self)
    }

    #[must_use]
    pub fn loyalty(&self) -> Loyalty<'_> {
        Loyalty::new(self)
    }

    #[must_use]
    pub fn mail(&self) -> Mail<'_> {
        Mail::new(self)
    }

    #[must_use]
    pub fn market(&self) -> Market<'_> {
        Market::new(self)
    }

    #[must_use]
    pub fn opportunities(&self) -> Opportunities<'_> {
        Opportunities::new(self)
    }

    /// Planetary interaction.
    #[must_use]
    pub fn pi(&self) -> PlanetaryInteraction<'_> {
        PlanetaryInteraction::new(self)
    }

    #[must_use]
    pub fn routes(&self) -> Routes<'_> {
        Routes::new(self)
    }

    #[must_use]
    pub fn skills(&self) -> Skills<'_> {
        Skills::new(self)
    }

    #[must_use]
    pub fn sovereignty(&self) -> Sovereignty<'_> {
        Sovereignty::new(self)
    }

    #[must_use]
    pub fn status(&self) -> Status<'_> {
        Status::new(self)
    }

    #[must_use]
    pub fn universe(&self) -> Universe<'_> {
        Universe::new(self)
    }

    /// In-game UI control.
    #[must_use]
    pub fn ui(&self) -> UserInterface<'_> {
        UserInterface::new(self)
    }

    /// Settings, cache management, and delays.
    #[must_use]
    pub fn util(&self) -> Utility<'_> {
        Utility::new(self)
    }

    #[must_use]
    pub fn wallet(&self) -> Wallet<'_> {
        Wallet::new(self)
    }

    #[must_use]
    pub fn wars(&self) -> Wars<'_> {
        Wars::new(self)
    }
}

/// Empty bodies decode to `null`, anything that is not JSON to a string.
fn decode(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
