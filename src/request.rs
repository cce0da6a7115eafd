//! Request shape, URL construction, and cache fingerprints.

use std::fmt;

use bon::Builder;
use serde_json::{Map, Value};
use strum_macros::Display;
use url::Url;

use crate::Result;
use crate::error::Error;
use crate::settings::Settings;

/// ESI selects its production data source through this query parameter. It is always the
/// first parameter of a request URL.
pub const DATASOURCE: (&str, &str) = ("datasource", "tranquility");

/// The HTTP verbs ESI endpoints use.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A call to be issued through [`crate::Client::execute`].
///
/// `path` is relative to the configured route, e.g. `alliances/99000006/contacts`.
/// `query` must be a JSON object; `null` members are dropped.
///
/// # Example
///
/// ```
/// use esi_client::request::{Method, Request};
/// use serde_json::json;
///
/// let request = Request::builder()
///     .path("characters/affiliation")
///     .method(Method::Post)
///     .body(json!([2112625428]))
///     .build();
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder, PartialEq)]
#[builder(on(String, into))]
pub struct Request {
    pub path: String,
    #[builder(default)]
    pub method: Method,
    pub body: Option<Value>,
    pub query: Option<Value>,
    #[builder(default)]
    pub needs_auth: bool,
}

impl Request {
    /// Query members with `null` values removed.
    pub(crate) fn query_members(&self) -> Result<Option<Map<String, Value>>> {
        match &self.query {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(
                map.iter()
                    .filter(|(_, value)| !value.is_null())
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            )),
            Some(other) => Err(Error::internal(format!(
                "query for {} must be a JSON object, got {other}",
                self.path
            ))),
        }
    }
}

/// Deterministic cache key for a request: method, public URL, auth mode, query, and body.
///
/// The URL used here never contains the auth token.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Fingerprint(String);

impl Fingerprint {
    #[must_use]
    pub fn new(
        method: Method,
        url: &str,
        needs_auth: bool,
        query: Option<&Map<String, Value>>,
        body: Option<&Value>,
    ) -> Self {
        let auth = if needs_auth { "AUTH" } else { "NOAUTH" };
        let query = query.map_or_else(|| "-".to_owned(), |q| Value::Object(q.clone()).to_string());
        let body = body.map_or_else(|| "-".to_owned(), Value::to_string);

        Self(format!("{method}_{url}_{auth}_{query}_{body}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the URL for `path` under the configured route, without any token.
///
/// Each `/`-separated piece of `path` becomes one percent-encoded segment, empty pieces are
/// dropped, and the result always ends in `/`. `query` members follow the data source in key
/// order, arrays are joined with commas, and the language tag has its slashes replaced by
/// hyphens.
pub(crate) fn public_url(
    settings: &Settings,
    path: &str,
    query: Option<&Map<String, Value>>,
) -> Result<String> {
    let mut url = Url::parse(&settings.link).map_err(|e| {
        Error::internal(format!("configured link {:?} is not a URL: {e}", settings.link))
    })?;

    let base: Vec<String> = url
        .path_segments()
        .map(|segments| {
            segments
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();
    url.path_segments_mut()
        .map_err(|()| {
            Error::internal(format!(
                "configured link {:?} cannot be a base URL",
                settings.link
            ))
        })?
        .clear()
        .extend(&base)
        .extend(path.split('/').filter(|segment| !segment.is_empty()))
        .push("");

    let mut pairs: Vec<(&str, String)> = vec![(DATASOURCE.0, DATASOURCE.1.to_owned())];
    if let Some(query) = query {
        pairs.extend(
            query
                .iter()
                .map(|(key, value)| (key.as_str(), query_value(value))),
        );
    }
    if !settings.language.is_empty() {
        pairs.push(("language", settings.language.replace('/', "-")));
    }

    url.set_query(Some(&serde_html_form::to_string(&pairs)?));
    url.set_fragment(None);

    Ok(url.into())
}

/// Appends the `token` query parameter to a URL produced by [`public_url`].
pub(crate) fn with_token(public_url: &str, token: &str) -> Result<String> {
    let mut url = Url::parse(public_url)?;
    let encoded = serde_html_form::to_string([("token", token)])?;
    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
        _ => encoded,
    };
    url.set_query(Some(&query));

    Ok(url.into())
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(query_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
