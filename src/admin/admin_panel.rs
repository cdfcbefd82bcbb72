//! Load/edit/save workflow behind the admin screen.

use super::admin_types::{AdminError, EventRecord, Invitation, Session};
use super::admin_validation::{validate_events, validate_invitation};
use super::{Credentials, PersistenceService};
use log::{debug, info};
use serde::{Deserialize, Serialize};

const NEW_EVENT_NAME: &str = "New Event";

/// The invitation and its ordered events as edited in the admin screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDraft {
    pub invitation: Invitation,
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

impl Default for AdminDraft {
    fn default() -> Self {
        let mut first = EventRecord::new("Ganesh Sthapana", 0);
        first.date = "2026-01-31".to_string();
        first.time = "9:00 am".to_string();
        first.venue = "At Residence".to_string();
        first.address = "A-21, Sudama Marg, Vijay Vadi, Path No. 6, Sikar Road, Jaipur".to_string();

        Self {
            invitation: Invitation::default(),
            events: vec![first],
        }
    }
}

impl AdminDraft {
    pub fn add_event(&mut self) -> &mut EventRecord {
        let order = self.events.len() as i32;
        self.events.push(EventRecord::new(NEW_EVENT_NAME, order));
        let last = self.events.len() - 1;
        &mut self.events[last]
    }

    pub fn remove_event(&mut self, index: usize) -> Option<EventRecord> {
        (index < self.events.len()).then(|| self.events.remove(index))
    }

    /// Rewrite `display_order` to match list position.
    fn renumber(&mut self) {
        for (index, event) in self.events.iter_mut().enumerate() {
            event.display_order = index as i32;
        }
    }
}

pub struct AdminPanel<S: PersistenceService> {
    service: S,
}

impl<S: PersistenceService> AdminPanel<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AdminError> {
        let session = self
            .service
            .sign_in(&credentials.email, &credentials.password)
            .await?;
        info!("Signed in as {}", credentials.email);
        Ok(session)
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> Result<(), AdminError> {
        self.service
            .sign_up(&credentials.email, &credentials.password)
            .await?;
        info!("Account created for {}", credentials.email);
        Ok(())
    }

    pub async fn sign_out(&self, session: &Session) -> Result<(), AdminError> {
        self.service.sign_out(session).await
    }

    /// The saved invitation, or the starter draft when the account has none yet.
    pub async fn load(&self, session: &Session) -> Result<AdminDraft, AdminError> {
        let Some(invitation) = self.service.fetch_invitation(session).await? else {
            debug!("No invitation stored for user {}, using starter draft", session.user_id);
            return Ok(AdminDraft::default());
        };

        let mut draft = AdminDraft {
            invitation,
            ..AdminDraft::default()
        };
        if let Some(id) = draft.invitation.id.clone() {
            let events = self.service.fetch_events(session, &id).await?;
            if !events.is_empty() {
                draft.events = events;
            }
        }
        Ok(draft)
    }

    /// Create or update the invitation, then replace its whole event list.
    ///
    /// On success the draft carries the invitation id and renumbered events.
    pub async fn save(&self, session: &Session, draft: &mut AdminDraft) -> Result<(), AdminError> {
        validate_invitation(&draft.invitation)?;
        validate_events(&draft.events)?;
        draft.renumber();

        let invitation_id = match draft.invitation.id.clone() {
            Some(id) => {
                self.service.update_invitation(session, &draft.invitation).await?;
                id
            }
            None => {
                let stored = self.service.insert_invitation(session, &draft.invitation).await?;
                let id = stored.id.ok_or_else(|| {
                    AdminError::InvalidResponse("stored invitation has no id".to_string())
                })?;
                draft.invitation.id = Some(id.clone());
                id
            }
        };

        self.service.delete_events(session, &invitation_id).await?;
        self.service
            .insert_events(session, &invitation_id, &draft.events)
            .await?;

        info!(
            "Invitation {} saved with {} events",
            invitation_id,
            draft.events.len()
        );
        Ok(())
    }
}
