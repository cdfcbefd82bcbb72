//! Admin access to the hosted invitation backend.
//!
//! The backend owns accounts and the `invitations`/`events` tables. Everything in
//! this crate that renders an invitation works from [`crate::wedding::WeddingData`]
//! and never talks to the backend directly.

use async_trait::async_trait;
use secrecy::SecretString;
use std::env;

mod admin_panel;
mod admin_types;
mod admin_validation;
mod supabase;

pub use admin_panel::*;
pub use admin_types::*;
pub use admin_validation::*;
pub use supabase::SupabaseClient;

pub const ADMIN_EMAIL_VAR: &str = "VIVAH_ADMIN_EMAIL";
pub const ADMIN_PASSWORD_VAR: &str = "VIVAH_ADMIN_PASSWORD";

/// Authentication and row storage offered by the backend.
#[async_trait]
pub trait PersistenceService: Send + Sync {
    async fn sign_up(&self, email: &str, password: &SecretString) -> Result<(), AdminError>;

    async fn sign_in(&self, email: &str, password: &SecretString) -> Result<Session, AdminError>;

    async fn sign_out(&self, session: &Session) -> Result<(), AdminError>;

    /// The account's invitation, if it has saved one.
    async fn fetch_invitation(&self, session: &Session) -> Result<Option<Invitation>, AdminError>;

    /// Events of an invitation ordered by `display_order`.
    async fn fetch_events(
        &self,
        session: &Session,
        invitation_id: &str,
    ) -> Result<Vec<EventRecord>, AdminError>;

    /// Insert and return the stored row, including its server-issued id.
    async fn insert_invitation(
        &self,
        session: &Session,
        invitation: &Invitation,
    ) -> Result<Invitation, AdminError>;

    async fn update_invitation(
        &self,
        session: &Session,
        invitation: &Invitation,
    ) -> Result<(), AdminError>;

    async fn delete_events(&self, session: &Session, invitation_id: &str) -> Result<(), AdminError>;

    async fn insert_events(
        &self,
        session: &Session,
        invitation_id: &str,
        events: &[EventRecord],
    ) -> Result<(), AdminError>;
}

/// Email/password pair for the admin account.
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: SecretString::from(password.to_string()),
        }
    }

    pub fn from_env() -> Result<Self, AdminError> {
        let email = env::var(ADMIN_EMAIL_VAR)
            .map_err(|_| AdminError::NotConfigured(format!("{} must be set", ADMIN_EMAIL_VAR)))?;
        let password = env::var(ADMIN_PASSWORD_VAR).map_err(|_| {
            AdminError::NotConfigured(format!("{} must be set", ADMIN_PASSWORD_VAR))
        })?;
        Ok(Self::new(&email, &password))
    }
}
