//! Supabase REST implementation of [`PersistenceService`].
//!
//! Auth goes through GoTrue (`/auth/v1`), rows through PostgREST (`/rest/v1`).

use super::admin_types::{AdminError, EventRecord, Invitation, NewEventRow, Session};
use super::PersistenceService;
use crate::config::BackendConfig;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};

const INVITATIONS_TABLE: &str = "invitations";
const EVENTS_TABLE: &str = "events";

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: SecretString,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: SecretString) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, AdminError> {
        let url = config
            .url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AdminError::NotConfigured("backend url is not set".to_string()))?;
        let key = config
            .anon_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AdminError::NotConfigured("backend key is not set".to_string()))?;
        Ok(Self::new(url, SecretString::from(key.to_string())))
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn public(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("apikey", self.anon_key.expose_secret())
    }

    fn authed(&self, builder: RequestBuilder, session: &Session) -> RequestBuilder {
        self.public(builder)
            .bearer_auth(session.access_token.expose_secret())
    }
}

/// Pull a human readable message out of a GoTrue or PostgREST error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string())
}

async fn check(response: Response) -> Result<Response, AdminError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    error!("Backend request failed with {}: {}", status, message);
    Err(AdminError::Service {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl PersistenceService for SupabaseClient {
    async fn sign_up(&self, email: &str, password: &SecretString) -> Result<(), AdminError> {
        let response = self
            .public(self.http.post(self.auth_url("signup")))
            .json(&json!({ "email": email, "password": password.expose_secret() }))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &SecretString) -> Result<Session, AdminError> {
        let response = self
            .public(self.http.post(self.auth_url("token")))
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password.expose_secret() }))
            .send()
            .await?;

        let response = match check(response).await {
            Ok(response) => response,
            Err(AdminError::Service { message, .. }) => return Err(AdminError::AuthFailed(message)),
            Err(e) => return Err(e),
        };

        let token: TokenResponse = response.json().await?;
        debug!("Signed in as user {}", token.user.id);
        Ok(Session {
            user_id: token.user.id,
            email: token.user.email,
            access_token: SecretString::from(token.access_token),
        })
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AdminError> {
        let response = self
            .authed(self.http.post(self.auth_url("logout")), session)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn fetch_invitation(&self, session: &Session) -> Result<Option<Invitation>, AdminError> {
        let user_filter = format!("eq.{}", session.user_id);
        let response = self
            .authed(self.http.get(self.rest_url(INVITATIONS_TABLE)), session)
            .query(&[("select", "*"), ("user_id", user_filter.as_str()), ("limit", "1")])
            .send()
            .await?;
        let rows: Vec<Invitation> = check(response).await?.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn fetch_events(
        &self,
        session: &Session,
        invitation_id: &str,
    ) -> Result<Vec<EventRecord>, AdminError> {
        let invitation_filter = format!("eq.{}", invitation_id);
        let response = self
            .authed(self.http.get(self.rest_url(EVENTS_TABLE)), session)
            .query(&[
                ("select", "*"),
                ("invitation_id", invitation_filter.as_str()),
                ("order", "display_order.asc"),
            ])
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn insert_invitation(
        &self,
        session: &Session,
        invitation: &Invitation,
    ) -> Result<Invitation, AdminError> {
        let mut row = serde_json::to_value(invitation)
            .map_err(|e| AdminError::InvalidResponse(e.to_string()))?;
        if let Some(fields) = row.as_object_mut() {
            fields.remove("id");
            fields.insert("user_id".to_string(), Value::String(session.user_id.clone()));
        }

        let response = self
            .authed(self.http.post(self.rest_url(INVITATIONS_TABLE)), session)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        let rows: Vec<Invitation> = check(response).await?.json().await?;
        rows.into_iter()
            .next()
            .filter(|inv| inv.id.is_some())
            .ok_or_else(|| AdminError::InvalidResponse("insert returned no invitation id".to_string()))
    }

    async fn update_invitation(
        &self,
        session: &Session,
        invitation: &Invitation,
    ) -> Result<(), AdminError> {
        let id = invitation
            .id
            .as_deref()
            .ok_or_else(|| AdminError::Validation("invitation has no id".to_string()))?;
        let mut row = serde_json::to_value(invitation)
            .map_err(|e| AdminError::InvalidResponse(e.to_string()))?;
        if let Some(fields) = row.as_object_mut() {
            fields.remove("id");
        }

        let id_filter = format!("eq.{}", id);
        let response = self
            .authed(self.http.patch(self.rest_url(INVITATIONS_TABLE)), session)
            .query(&[("id", id_filter.as_str())])
            .json(&row)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn delete_events(&self, session: &Session, invitation_id: &str) -> Result<(), AdminError> {
        let invitation_filter = format!("eq.{}", invitation_id);
        let response = self
            .authed(self.http.delete(self.rest_url(EVENTS_TABLE)), session)
            .query(&[("invitation_id", invitation_filter.as_str())])
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn insert_events(
        &self,
        session: &Session,
        invitation_id: &str,
        events: &[EventRecord],
    ) -> Result<(), AdminError> {
        if events.is_empty() {
            return Ok(());
        }
        let rows: Vec<NewEventRow> = events
            .iter()
            .map(|event| NewEventRow::new(invitation_id, event))
            .collect();
        let response = self
            .authed(self.http.post(self.rest_url(EVENTS_TABLE)), session)
            .json(&rows)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"code":"23505","message":"duplicate key"}"#),
            "duplicate key"
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(error_message(" upstream timeout \n"), "upstream timeout");
    }

    #[test]
    fn test_from_config_requires_url_and_key() {
        let mut backend = BackendConfig::default();
        assert!(matches!(
            SupabaseClient::from_config(&backend),
            Err(AdminError::NotConfigured(_))
        ));

        backend.url = Some("https://project.supabase.co/".to_string());
        assert!(SupabaseClient::from_config(&backend).is_err());

        backend.anon_key = Some("anon".to_string());
        let client = SupabaseClient::from_config(&backend).unwrap();
        assert_eq!(
            client.rest_url("events"),
            "https://project.supabase.co/rest/v1/events"
        );
        assert_eq!(
            client.auth_url("token"),
            "https://project.supabase.co/auth/v1/token"
        );
    }
}
