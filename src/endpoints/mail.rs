//! EVE mail. Every endpoint requires auth (`esi-mail.*`).

use bon::Builder;
use serde::Serialize;
use serde_json::json;
use strum_macros::Display;

use super::{NO_BODY, get_authed, send};
use crate::Result;
use crate::client::Client;
use crate::request::Method;
use crate::response::Response;

#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecipientType {
    Alliance,
    Character,
    Corporation,
    MailingList,
}

#[non_exhaustive]
#[derive(Clone, Debug, Serialize)]
pub struct Recipient {
    pub recipient_id: i64,
    pub recipient_type: RecipientType,
}

impl Recipient {
    #[must_use]
    pub fn new(recipient_id: i64, recipient_type: RecipientType) -> Self {
        Self {
            recipient_id,
            recipient_type,
        }
    }
}

/// A mail to send with [`Mail::send`].
///
/// # Example
///
/// ```
/// use esi_client::endpoints::mail::{NewMail, Recipient, RecipientType};
///
/// let mail = NewMail::builder()
///     .recipients(vec![Recipient::new(2_112_625_428, RecipientType::Character)])
///     .subject("Fleet tonight")
///     .body("Form up at 19:00 in Jita.")
///     .build();
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder, Serialize)]
#[builder(on(String, into))]
pub struct NewMail {
    pub recipients: Vec<Recipient>,
    pub subject: String,
    pub body: String,
    /// CSPA charge the sender agrees to pay, see
    /// [`Character::cspa`](super::character::Character::cspa).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_cost: Option<i64>,
}

/// Labels and read state of a mail. Omitted fields are left as they are.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Builder, Serialize)]
pub struct MailMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Builder, Serialize)]
#[builder(on(String, into))]
pub struct NewLabel {
    pub name: String,
    /// Hex color, e.g. `#ffffff`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Clone, Copy, Debug)]
pub struct Mail<'client> {
    client: &'client Client,
}

impl<'client> Mail<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// The 50 most recent mail headers, optionally filtered by `labels`. Pass `last_mail_id`
    /// to page backwards.
    pub async fn headers(
        &self,
        character_id: i64,
        labels: Option<&[i64]>,
        last_mail_id: Option<i64>,
    ) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/mail"),
            Some(json!({ "labels": labels, "last_mail_id": last_mail_id })),
        )
        .await
    }

    pub async fn send(&self, character_id: i64, mail: &NewMail) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            format!("characters/{character_id}/mail"),
            Some(mail),
            None,
            true,
        )
        .await
    }

    pub async fn delete(&self, character_id: i64, mail_id: i64) -> Result<Response> {
        send(
            self.client,
            Method::Delete,
            format!("characters/{character_id}/mail/{mail_id}"),
            NO_BODY,
            None,
            true,
        )
        .await
    }

    /// Contents of a mail.
    pub async fn mail(&self, character_id: i64, mail_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/mail/{mail_id}"),
            None,
        )
        .await
    }

    pub async fn update_metadata(
        &self,
        character_id: i64,
        mail_id: i64,
        metadata: &MailMetadata,
    ) -> Result<Response> {
        send(
            self.client,
            Method::Put,
            format!("characters/{character_id}/mail/{mail_id}"),
            Some(metadata),
            None,
            true,
        )
        .await
    }

    #[must_use]
    pub fn labels(&self) -> Labels<'client> {
        Labels {
            client: self.client,
        }
    }

    #[must_use]
    pub fn lists(&self) -> Lists<'client> {
        Lists {
            client: self.client,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Labels<'client> {
    client: &'client Client,
}

impl Labels<'_> {
    /// Labels and unread counts.
    pub async fn labels(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/mail/labels"),
            None,
        )
        .await
    }

    pub async fn create(&self, character_id: i64, label: &NewLabel) -> Result<Response> {
        send(
            self.client,
            Method::Post,
            format!("characters/{character_id}/mail/labels"),
            Some(label),
            None,
            true,
        )
        .await
    }

    pub async fn delete(&self, character_id: i64, label_id: i64) -> Result<Response> {
        send(
            self.client,
            Method::Delete,
            format!("characters/{character_id}/mail/labels/{label_id}"),
            NO_BODY,
            None,
            true,
        )
        .await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Lists<'client> {
    client: &'client Client,
}

impl Lists<'_> {
    /// Mailing lists the character is subscribed to.
    pub async fn lists(&self, character_id: i64) -> Result<Response> {
        get_authed(
            self.client,
            format!("characters/{character_id}/mail/lists"),
            None,
        )
        .await
    }
}
