//! The normalized `{headers, data}` shape every call resolves to.

use std::collections::BTreeMap;

use reqwest::header::{ETAG, HeaderMap};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::serde_helpers::deserialize_with_warnings;

/// Response headers and decoded JSON payload.
///
/// Header names are lowercase. A header ESI repeats is joined with `, `.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Response {
    pub headers: BTreeMap<String, String>,
    pub data: Value,
}

impl Response {
    #[must_use]
    pub fn new(headers: BTreeMap<String, String>, data: Value) -> Self {
        Self { headers, data }
    }

    pub(crate) fn from_headers(headers: &HeaderMap, data: Value) -> Self {
        let mut collected: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in headers {
            let Ok(value) = value.to_str() else {
                #[cfg(feature = "tracing")]
                tracing::debug!(header = %name, "skipping non-ASCII header value");
                continue;
            };

            collected
                .entry(name.as_str().to_owned())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_owned());
        }

        Self::new(collected, data)
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.header(ETAG.as_str())
    }

    /// Decodes `data` into `T`.
    ///
    /// With the `tracing` feature, fields of the payload that `T` does not declare are logged
    /// as warnings, which usually means ESI added something to the schema.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        deserialize_with_warnings(self.data.clone())
    }
}
