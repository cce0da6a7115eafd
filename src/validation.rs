//! Input validation for endpoint arguments.
//!
//! Every check runs before a request is built, so a rejected input never costs a network call.
//! Absence is modelled with [`Option`]: `None` is "not provided", while `0`, `false` and `""`
//! are ordinary values and are never mistaken for a missing input.

use bon::Builder;
use serde_json::Value;
use strum_macros::Display;

use crate::Result;
use crate::error::{Error, Kind};

/// The primitive kind an input is expected to have.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Text,
    Number,
    /// Objects and arrays.
    Object,
    Boolean,
}

impl ValueKind {
    /// Returns `true` when `value` is of this kind. An explicit `null` matches no kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::Number => value.is_number(),
            Self::Object => value.is_object() || value.is_array(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// A single validation check.
///
/// # Example
///
/// ```
/// use esi_client::validation::{Rule, ValueKind};
/// use serde_json::json;
///
/// let flag = json!("secure");
/// let choices = [json!("shortest"), json!("secure"), json!("insecure")];
///
/// Rule::builder()
///     .value(&flag)
///     .kind(ValueKind::Text)
///     .message("flag must be 'shortest', 'secure' or 'insecure'")
///     .options(&choices)
///     .build()
///     .check()?;
/// # Ok::<(), esi_client::error::Error>(())
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
pub struct Rule<'value> {
    value: Option<&'value Value>,
    kind: ValueKind,
    #[builder(into)]
    message: String,
    options: Option<&'value [Value]>,
    #[builder(default)]
    optional: bool,
}

impl Rule<'_> {
    /// Runs the check described by this rule.
    pub fn check(&self) -> Result<()> {
        validate(
            self.value,
            self.kind,
            &self.message,
            self.options,
            self.optional,
        )
    }
}

/// Checks `value` against `kind`, the allowed `options`, and presence.
///
/// Fails with [`Kind::MissingInput`] when `value` is `None` and not `optional`,
/// [`Kind::TypeMismatch`] when the kind differs, and [`Kind::InvalidChoice`] when
/// `options` is given and does not contain `value`.
pub fn validate(
    value: Option<&Value>,
    kind: ValueKind,
    message: &str,
    options: Option<&[Value]>,
    optional: bool,
) -> Result<()> {
    let Some(value) = value else {
        if optional {
            return Ok(());
        }
        return Err(Error::validation(Kind::MissingInput, message));
    };

    if !kind.matches(value) {
        return Err(Error::validation(Kind::TypeMismatch, message));
    }

    if let Some(options) = options
        && !options.contains(value)
    {
        return Err(Error::validation(Kind::InvalidChoice, message));
    }

    Ok(())
}

/// Checks that `value` is one of `choices`.
pub(crate) fn choice(value: &str, choices: &[&str], message: &str) -> Result<()> {
    let options: Vec<Value> = choices.iter().copied().map(Value::from).collect();
    validate(
        Some(&Value::from(value)),
        ValueKind::Text,
        message,
        Some(&options),
        false,
    )
}
