//! Rows and errors for the invitation backend.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

/// Custom error type for admin operations
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Backend is not configured: {0}")]
    NotConfigured(String),
    #[error("Sign-in failed: {0}")]
    AuthFailed(String),
    #[error("Request to backend failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Backend returned {status}: {message}")]
    Service { status: u16, message: String },
    #[error("Unexpected backend response: {0}")]
    InvalidResponse(String),
    #[error("Invalid input: {0}")]
    Validation(String),
}

/// Nullable text columns come back as `null`; treat them as empty strings.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Invitation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub groom_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bride_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub groom_parents: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bride_parents: String,
    /// `YYYY-MM-DD`, may be empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub wedding_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub wedding_hashtag: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub whatsapp_groom: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub whatsapp_bride: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_message: String,
}

impl Default for Invitation {
    fn default() -> Self {
        Self {
            id: None,
            groom_name: "Neelesh".to_string(),
            bride_name: "Ayushi".to_string(),
            groom_parents: "Mr. & Mrs. Sharma".to_string(),
            bride_parents: "Mr. & Mrs. Gupta".to_string(),
            wedding_date: "2026-02-05".to_string(),
            wedding_hashtag: "#NeeleshWedsAyushi".to_string(),
            whatsapp_groom: String::new(),
            whatsapp_bride: String::new(),
            custom_message: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventSide {
    Groom,
    Bride,
    #[default]
    Both,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub venue: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub map_link: String,
    #[serde(default)]
    pub side: EventSide,
    #[serde(default)]
    pub display_order: i32,
}

impl EventRecord {
    pub fn new(name: &str, display_order: i32) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            date: String::new(),
            time: String::new(),
            venue: String::new(),
            address: String::new(),
            map_link: String::new(),
            side: EventSide::Both,
            display_order,
        }
    }
}

/// Row shape for inserting an event; server ids are never sent back.
#[derive(Debug, Serialize)]
pub struct NewEventRow<'a> {
    pub invitation_id: &'a str,
    pub name: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub venue: &'a str,
    pub address: &'a str,
    pub map_link: &'a str,
    pub side: EventSide,
    pub display_order: i32,
}

impl<'a> NewEventRow<'a> {
    pub fn new(invitation_id: &'a str, event: &'a EventRecord) -> Self {
        Self {
            invitation_id,
            name: &event.name,
            date: &event.date,
            time: &event.time,
            venue: &event.venue,
            address: &event.address,
            map_link: &event.map_link,
            side: event.side,
            display_order: event.display_order,
        }
    }
}

/// Signed-in account.
#[derive(Debug)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    pub access_token: SecretString,
}
