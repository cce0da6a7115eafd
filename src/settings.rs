//! Persisted client settings (`esi.json`).
//!
//! The [`SettingsStore`] is the only part of the crate that touches durable state. It reads the
//! project configuration first and falls back to a secondary configuration (by default the
//! `esi.json` bundled with this crate) when the project file is missing or malformed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use bon::Builder;
use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::Display;
use uuid::Uuid;

use crate::Result;
use crate::error::{ConfigUnavailable, Error, InvalidChannel, PersistFailure};

/// Host serving every ESI release channel.
pub const SERVER: &str = "esi.evetech.net";

/// Environment variable overriding the default project configuration path.
pub const CONFIG_PATH_VAR: &str = "ESI_CONFIG_PATH";

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "esi.json";

const BUNDLED: &str = include_str!("../esi.json");

/// ESI release channels. Each one is a path segment under [`SERVER`].
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    #[default]
    Latest,
    V1,
    Legacy,
    Dev,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Latest, Channel::V1, Channel::Legacy, Channel::Dev];

    /// The base URL for this channel, e.g. `https://esi.evetech.net/latest/`.
    #[must_use]
    pub fn link(self) -> String {
        format!("https://{SERVER}/{self}/")
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(route: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.to_string() == route)
            .ok_or_else(|| {
                InvalidChannel {
                    route: route.to_owned(),
                }
                .into()
            })
    }
}

/// The persisted configuration record.
///
/// Unknown fields found in `esi.json` are kept and written back untouched.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Sent in the `User-Agent` header as `(for: <project name>)` when non-empty.
    #[serde(default)]
    pub project_name: String,
    /// Full base URL, including the channel segment.
    #[serde(default = "default_link")]
    pub link: String,
    #[serde(default, with = "crate::serde_helpers::optional_secret")]
    pub auth_token: Option<SecretString>,
    /// Slash separated language tag, e.g. `en/us`. Empty disables the `language` parameter.
    #[serde(default)]
    pub language: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

fn default_link() -> String {
    Channel::Latest.link()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            link: default_link(),
            auth_token: None,
            language: "en/us".to_owned(),
            extra: Map::new(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn auth_token(&self) -> Option<&SecretString> {
        self.auth_token.as_ref()
    }

    /// Fields of the record this crate does not interpret.
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// A partial settings update. Omitted fields keep their current value.
///
/// An explicitly empty `auth_token` clears the stored token.
///
/// # Example
///
/// ```
/// use esi_client::settings::SettingsUpdate;
///
/// let update = SettingsUpdate::builder()
///     .route("latest")
///     .language("en/us")
///     .project_name("industry-planner")
///     .build();
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Default, Builder)]
#[builder(on(String, into))]
pub struct SettingsUpdate {
    /// One of the [`Channel`] names: `latest`, `v1`, `legacy`, `dev`.
    pub route: Option<String>,
    #[builder(into)]
    pub auth_token: Option<SecretString>,
    pub language: Option<String>,
    pub project_name: Option<String>,
}

/// Applies `update` on top of `current`. Explicit values win, everything else is kept.
pub fn merge(current: &Settings, update: &SettingsUpdate) -> Result<Settings> {
    let link = match &update.route {
        Some(route) => route.parse::<Channel>()?.link(),
        None => current.link.clone(),
    };

    let auth_token = match &update.auth_token {
        Some(token) if token.expose_secret().is_empty() => None,
        Some(token) => Some(token.clone()),
        None => current.auth_token.clone(),
    };

    Ok(Settings {
        project_name: update
            .project_name
            .clone()
            .unwrap_or_else(|| current.project_name.clone()),
        link,
        auth_token,
        language: update
            .language
            .clone()
            .unwrap_or_else(|| current.language.clone()),
        extra: current.extra.clone(),
    })
}

/// Reads and writes [`Settings`], caching the resolved record after the first read.
#[derive(Clone, Debug)]
pub struct SettingsStore {
    primary: PathBuf,
    /// `None` uses the `esi.json` compiled into this crate.
    fallback: Option<PathBuf>,
    current: Arc<RwLock<Option<Settings>>>,
}

/// `$ESI_CONFIG_PATH` when set, otherwise `./esi.json`.
#[must_use]
pub fn default_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_VAR).map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from)
}

impl Default for SettingsStore {
    /// Uses [`default_path`] with the bundled defaults as fallback.
    fn default() -> Self {
        Self::new(default_path(), None)
    }
}

impl SettingsStore {
    #[must_use]
    pub fn new(primary: impl Into<PathBuf>, fallback: Option<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallback,
            current: Arc::new(RwLock::new(None)),
        }
    }

    #[must_use]
    pub fn primary(&self) -> &Path {
        &self.primary
    }

    #[must_use]
    pub fn fallback(&self) -> Option<&Path> {
        self.fallback.as_deref()
    }

    /// Returns the current settings, reading them on first use.
    ///
    /// Fails with [`crate::error::Kind::ConfigUnavailable`] only when both the project
    /// configuration and the fallback are unreadable or malformed.
    pub fn get(&self) -> Result<Settings> {
        if let Some(settings) = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(settings.clone());
        }

        self.reload()
    }

    /// Drops the cached record and reads the configuration again.
    pub fn reload(&self) -> Result<Settings> {
        let settings = self.load()?;
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(settings.clone());
        Ok(settings)
    }

    /// Merges `update` into the persisted settings and rewrites the whole file.
    ///
    /// The channel is validated before anything is written, so an invalid route leaves the
    /// file untouched. On the first ever write the fallback (or built-in defaults) is the base.
    pub fn set(&self, update: &SettingsUpdate) -> Result<Settings> {
        let current = match self.load() {
            Ok(settings) => settings,
            Err(e) if e.kind() == crate::error::Kind::ConfigUnavailable => Settings::default(),
            Err(e) => return Err(e),
        };

        let merged = merge(&current, update)?;
        self.persist(&merged)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            path = %self.primary.display(),
            link = %merged.link,
            language = %merged.language,
            project_name = %merged.project_name,
            has_token = merged.auth_token.is_some(),
            "updated settings"
        );

        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(merged.clone());
        Ok(merged)
    }

    /// Creates the project configuration from the fallback when it does not exist yet.
    ///
    /// Returns `true` when a file was created. A project file that exists but cannot be read
    /// or written is reported through a warning and left alone; reads then use the fallback.
    pub fn bootstrap(&self) -> Result<bool> {
        if self.primary.exists() {
            #[cfg(feature = "tracing")]
            if let Err(e) = fs::OpenOptions::new()
                .read(true)
                .append(true)
                .open(&self.primary)
            {
                tracing::warn!(
                    path = %self.primary.display(),
                    error = %e,
                    "config file is not readable and writable, reverting to the fallback configuration"
                );
            }
            return Ok(false);
        }

        let defaults = self.read_fallback().unwrap_or_else(|_| Settings::default());
        self.persist(&defaults)?;

        #[cfg(feature = "tracing")]
        tracing::info!(path = %self.primary.display(), "created config file");

        Ok(true)
    }

    fn load(&self) -> Result<Settings> {
        match read(&self.primary) {
            Ok(settings) => Ok(settings),
            Err(primary_reason) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    path = %self.primary.display(),
                    reason = %primary_reason,
                    "no usable project config, reverting to the fallback configuration"
                );

                self.read_fallback().map_err(|fallback_reason| {
                    ConfigUnavailable {
                        primary: self.primary.clone(),
                        reason: format!("{primary_reason}; fallback: {fallback_reason}"),
                    }
                    .into()
                })
            }
        }
    }

    fn read_fallback(&self) -> std::result::Result<Settings, String> {
        match &self.fallback {
            Some(path) => read(path),
            None => serde_json::from_str(BUNDLED).map_err(|e| e.to_string()),
        }
    }

    /// Writes the full record to a sibling temporary file and renames it over the target.
    fn persist(&self, settings: &Settings) -> Result<()> {
        let contents = serde_json::to_string_pretty(settings)?;

        let file_name = self
            .primary
            .file_name()
            .map_or_else(|| CONFIG_FILE.into(), |name| name.to_string_lossy());
        let temporary = self
            .primary
            .with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4()));

        let written =
            fs::write(&temporary, contents).and_then(|()| fs::rename(&temporary, &self.primary));
        if let Err(source) = written {
            // Best effort: the temporary file may not exist if the first write failed
            let _ignored: io::Result<()> = fs::remove_file(&temporary);
            return Err(PersistFailure {
                path: self.primary.clone(),
                source,
            }
            .into());
        }

        Ok(())
    }
}

fn read(path: &Path) -> std::result::Result<Settings, String> {
    let contents = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    serde_json::from_str(&contents).map_err(|e| format!("{}: {e}", path.display()))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests assert on the error side of results")]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Kind;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("esi-client-{name}-{}.json", Uuid::new_v4()))
    }

    fn write_json(path: &Path, value: &Value) {
        fs::write(path, value.to_string()).expect("temp dir should be writable");
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).expect("file exists")).expect("valid json")
    }

    #[test]
    fn channel_links() {
        assert_eq!(Channel::Latest.link(), "https://esi.evetech.net/latest/");
        assert_eq!(Channel::V1.link(), "https://esi.evetech.net/v1/");
        assert_eq!("legacy".parse::<Channel>().ok(), Some(Channel::Legacy));
        assert_eq!("dev".parse::<Channel>().ok(), Some(Channel::Dev));

        let err = "Latest".parse::<Channel>().unwrap_err();
        assert_eq!(err.kind(), Kind::InvalidChannel);
    }

    #[test]
    fn bundled_defaults_parse() {
        let settings: Settings = serde_json::from_str(BUNDLED).expect("bundled esi.json is valid");
        assert_eq!(settings.link, "https://esi.evetech.net/latest/");
        assert_eq!(settings.language, "en/us");
        assert!(settings.auth_token.is_none());
    }

    #[test]
    fn merge_prefers_explicit_values() -> anyhow::Result<()> {
        let current = Settings {
            project_name: "old".to_owned(),
            link: Channel::Latest.link(),
            auth_token: Some(SecretString::from("token")),
            language: "de".to_owned(),
            extra: Map::new(),
        };

        let merged = merge(
            &current,
            &SettingsUpdate::builder().route("dev").language("fr").build(),
        )?;

        assert_eq!(merged.link, "https://esi.evetech.net/dev/");
        assert_eq!(merged.language, "fr");
        assert_eq!(merged.project_name, "old");
        assert_eq!(
            merged.auth_token.as_ref().map(|t| t.expose_secret().to_owned()),
            Some("token".to_owned())
        );

        let cleared = merge(&merged, &SettingsUpdate::builder().auth_token("").build())?;
        assert!(cleared.auth_token.is_none());
        assert_eq!(cleared.link, merged.link);

        Ok(())
    }

    #[test]
    fn get_falls_back_when_primary_missing() -> anyhow::Result<()> {
        let store = SettingsStore::new(temp_path("missing"), None);

        let settings = store.get()?;
        assert_eq!(settings.link, Channel::Latest.link());

        Ok(())
    }

    #[test]
    fn get_falls_back_when_primary_malformed() -> anyhow::Result<()> {
        let primary = temp_path("malformed");
        let fallback = temp_path("fallback");
        fs::write(&primary, "{ not json")?;
        write_json(
            &fallback,
            &json!({
                "projectName": "fallback",
                "link": Channel::V1.link(),
                "authToken": "",
                "language": ""
            }),
        );

        let settings = SettingsStore::new(&primary, Some(fallback.clone())).get()?;
        assert_eq!(settings.project_name, "fallback");
        assert_eq!(settings.link, Channel::V1.link());

        fs::remove_file(primary)?;
        fs::remove_file(fallback)?;
        Ok(())
    }

    #[test]
    fn get_fails_when_both_unreadable() {
        let store = SettingsStore::new(temp_path("none"), Some(temp_path("none-either")));

        let err = store.get().unwrap_err();
        assert_eq!(err.kind(), Kind::ConfigUnavailable);
    }

    #[test]
    fn set_rewrites_whole_record_and_keeps_unknown_fields() -> anyhow::Result<()> {
        let primary = temp_path("set");
        write_json(
            &primary,
            &json!({
                "projectName": "planner",
                "link": Channel::Latest.link(),
                "authToken": "abc",
                "language": "en/us",
                "theme": "dark"
            }),
        );
        let store = SettingsStore::new(&primary, None);

        let updated = store.set(&SettingsUpdate::builder().route("v1").build())?;
        assert_eq!(updated.link, Channel::V1.link());

        let written = read_json(&primary);
        assert_eq!(
            written,
            json!({
                "projectName": "planner",
                "link": "https://esi.evetech.net/v1/",
                "authToken": "abc",
                "language": "en/us",
                "theme": "dark"
            })
        );
        assert_eq!(store.get()?.link, Channel::V1.link());

        fs::remove_file(primary)?;
        Ok(())
    }

    #[test]
    fn set_with_bogus_route_leaves_file_unchanged() -> anyhow::Result<()> {
        let primary = temp_path("bogus");
        let original = json!({
            "projectName": "planner",
            "link": Channel::Legacy.link(),
            "authToken": "",
            "language": "en/us"
        });
        write_json(&primary, &original);
        let store = SettingsStore::new(&primary, None);

        let err = store
            .set(&SettingsUpdate::builder().route("bogus").build())
            .unwrap_err();

        assert_eq!(err.kind(), Kind::InvalidChannel);
        assert_eq!(read_json(&primary), original);

        fs::remove_file(primary)?;
        Ok(())
    }

    #[test]
    fn first_write_starts_from_fallback() -> anyhow::Result<()> {
        let primary = temp_path("first");
        let store = SettingsStore::new(&primary, None);

        store.set(&SettingsUpdate::builder().project_name("killboard").build())?;

        let written = read_json(&primary);
        assert_eq!(written["projectName"], "killboard");
        assert_eq!(written["link"], "https://esi.evetech.net/latest/");
        assert_eq!(written["language"], "en/us");
        assert_eq!(written["authToken"], "");

        fs::remove_file(primary)?;
        Ok(())
    }

    #[test]
    fn set_leaves_no_staging_file_behind() -> anyhow::Result<()> {
        let primary = temp_path("staging");
        let store = SettingsStore::new(&primary, None);

        store.set(&SettingsUpdate::builder().language("fr").build())?;
        store.set(&SettingsUpdate::builder().route("v1").build())?;

        let name = primary
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let prefix = format!(".{name}.");
        let leftovers = fs::read_dir(std::env::temp_dir())?
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(&prefix))
            .count();

        assert_eq!(leftovers, 0, "staging files should be renamed into place");
        assert_eq!(read_json(&primary)["language"], "fr");
        assert_eq!(read_json(&primary)["link"], Channel::V1.link());

        fs::remove_file(&primary)?;
        Ok(())
    }

    #[test]
    fn set_into_missing_directory_is_persist_failure() {
        let primary = std::env::temp_dir()
            .join(format!("esi-client-absent-{}", Uuid::new_v4()))
            .join(CONFIG_FILE);
        let store = SettingsStore::new(&primary, None);

        let err = store
            .set(&SettingsUpdate::builder().language("en/us").build())
            .unwrap_err();
        assert_eq!(err.kind(), Kind::PersistFailure);
    }

    #[test]
    fn bootstrap_creates_primary_once() -> anyhow::Result<()> {
        let primary = temp_path("bootstrap");
        let store = SettingsStore::new(&primary, None);

        assert!(store.bootstrap()?);
        assert!(!store.bootstrap()?);
        assert_eq!(read_json(&primary)["link"], "https://esi.evetech.net/latest/");

        fs::remove_file(primary)?;
        Ok(())
    }

    #[test]
    fn cached_settings_ignore_later_file_edits_until_reload() -> anyhow::Result<()> {
        let primary = temp_path("reload");
        write_json(&primary, &json!({ "link": Channel::Latest.link(), "language": "en/us" }));
        let store = SettingsStore::new(&primary, None);
        assert_eq!(store.get()?.link, Channel::Latest.link());

        write_json(&primary, &json!({ "link": Channel::Dev.link(), "language": "en/us" }));
        assert_eq!(store.get()?.link, Channel::Latest.link());
        assert_eq!(store.reload()?.link, Channel::Dev.link());

        fs::remove_file(primary)?;
        Ok(())
    }
}
