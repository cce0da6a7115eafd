use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use reqwest::header;

use crate::request::Method;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A required input was not provided
    MissingInput,
    /// An input did not have the expected primitive kind
    TypeMismatch,
    /// An input was not one of the allowed values
    InvalidChoice,
    /// Neither the project configuration nor the fallback configuration could be read
    ConfigUnavailable,
    /// The requested release channel is not one of the known ESI routes
    InvalidChannel,
    /// The configuration could not be written to disk
    PersistFailure,
    /// An authenticated endpoint was called without a configured token
    AuthRequired,
    /// ESI answered with a non-successful status
    Remote,
    /// No response was received from ESI
    Transport,
    /// Internal error from dependencies, a misconfigured endpoint, or a configured link that is
    /// not a usable URL
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    /// The URL the failing call was dispatched to, with any token removed.
    ///
    /// Only [`Kind::Remote`] and [`Kind::Transport`] errors carry a URL.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        if let Some(remote) = self.downcast_ref::<Remote>() {
            return Some(&remote.url);
        }
        self.downcast_ref::<Transport>().map(|t| t.url.as_str())
    }

    pub fn validation<S: Into<String>>(kind: Kind, message: S) -> Self {
        Self::with_source(
            kind,
            Validation {
                reason: message.into(),
            },
        )
    }

    pub fn remote<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        url: String,
        message: S,
    ) -> Self {
        Remote {
            status_code,
            method,
            url,
            message: message.into(),
        }
        .into()
    }

    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        Transport {
            url: url.to_owned(),
            source,
        }
        .into()
    }

    #[must_use]
    pub fn auth_required() -> Self {
        AuthRequired.into()
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::with_source(
            Kind::Internal,
            Validation {
                reason: message.into(),
            },
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Upstream ESI rejected the call.
#[non_exhaustive]
#[derive(Debug)]
pub struct Remote {
    pub status_code: StatusCode,
    pub method: Method,
    /// Dispatched URL with the `token` query parameter stripped.
    pub url: String,
    /// The `error` field of ESI's JSON body, or the status text when absent.
    pub message: String,
}

impl fmt::Display for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.url, self.message
        )
    }
}

impl StdError for Remote {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Transport {
    pub url: String,
    pub source: reqwest::Error,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no response from {}: {}", self.url, self.source)
    }
}

impl StdError for Transport {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct AuthRequired;

impl fmt::Display for AuthRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "an authenticated endpoint was called without a token, set `authToken` in the esi.json config"
        )
    }
}

impl StdError for AuthRequired {}

#[non_exhaustive]
#[derive(Debug)]
pub struct ConfigUnavailable {
    pub primary: PathBuf,
    pub reason: String,
}

impl fmt::Display for ConfigUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to read {} or the fallback configuration: {}",
            self.primary.display(),
            self.reason
        )
    }
}

impl StdError for ConfigUnavailable {}

#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct InvalidChannel {
    pub route: String,
}

impl fmt::Display for InvalidChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "route {:?} must be one of: latest, v1, legacy, dev",
            self.route
        )
    }
}

impl StdError for InvalidChannel {}

#[non_exhaustive]
#[derive(Debug)]
pub struct PersistFailure {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl fmt::Display for PersistFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "couldn't write {}: {}", self.path.display(), self.source)
    }
}

impl StdError for PersistFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_html_form::ser::Error> for Error {
    fn from(e: serde_html_form::ser::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<Remote> for Error {
    fn from(err: Remote) -> Self {
        Error::with_source(Kind::Remote, err)
    }
}

impl From<Transport> for Error {
    fn from(err: Transport) -> Self {
        Error::with_source(Kind::Transport, err)
    }
}

impl From<AuthRequired> for Error {
    fn from(err: AuthRequired) -> Self {
        Error::with_source(Kind::AuthRequired, err)
    }
}

impl From<ConfigUnavailable> for Error {
    fn from(err: ConfigUnavailable) -> Self {
        Error::with_source(Kind::ConfigUnavailable, err)
    }
}

impl From<InvalidChannel> for Error {
    fn from(err: InvalidChannel) -> Self {
        Error::with_source(Kind::InvalidChannel, err)
    }
}

impl From<PersistFailure> for Error {
    fn from(err: PersistFailure) -> Self {
        Error::with_source(Kind::PersistFailure, err)
    }
}
