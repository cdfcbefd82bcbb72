//! Filtered invitation links.
//!
//! A guest can be sent a link that only shows some of the event days. The link
//! carries the chosen day ids in an `events` query parameter; no parameter (or
//! every id) means the full invitation. The shareable ids are the ids of the
//! configured event days, in day order.

use crate::wedding::{EventDay, WeddingData};
use log::debug;

pub const EVENTS_PARAM: &str = "events";

fn covers_all<S: AsRef<str>>(available: &[String], ids: &[S]) -> bool {
    !available.is_empty()
        && available
            .iter()
            .all(|known| ids.iter().any(|id| id.as_ref() == known))
}

/// Ordered selection of event ids, kept in the order the user picked them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareSelection {
    available: Vec<String>,
    selected: Vec<String>,
}

impl ShareSelection {
    /// Empty selection over the given shareable ids.
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::default();
        for id in available {
            let id = id.as_ref().trim();
            if !id.is_empty() && !selection.available.iter().any(|a| a == id) {
                selection.available.push(id.to_string());
            }
        }
        selection
    }

    pub fn for_wedding(data: &WeddingData) -> Self {
        Self::new(data.share_ids())
    }

    /// Select ids, ignoring unknown ids and duplicates.
    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            let id = id.as_ref().trim();
            if self.is_known(id) && !self.contains(id) {
                self.selected.push(id.to_string());
            }
        }
        self
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.available.iter().any(|a| a == id)
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_all(&self) -> bool {
        covers_all(&self.available, &self.selected)
    }

    /// Add the id at the end, or remove it if already selected.
    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.selected.retain(|s| s != id);
        } else if self.is_known(id) {
            self.selected.push(id.to_string());
        }
    }

    /// Select every id, or clear the selection when everything is already selected.
    pub fn toggle_all(&mut self) {
        if self.is_all() {
            self.selected.clear();
        } else {
            self.selected = self.available.clone();
        }
    }

    pub fn link(&self, base_url: &str) -> String {
        share_link(base_url, &self.available, &self.selected)
    }
}

/// Bare base URL for "everything", otherwise `<base>?events=<ids>`.
pub fn share_link<S: AsRef<str>>(base_url: &str, available: &[String], selected: &[S]) -> String {
    if selected.is_empty() || covers_all(available, selected) {
        return base_url.to_string();
    }
    let ids: Vec<&str> = selected.iter().map(|s| s.as_ref()).collect();
    let link = format!("{}?{}={}", base_url, EVENTS_PARAM, ids.join(","));
    debug!("Generated share link {}", link);
    link
}

/// Receiving side of a share link.
#[derive(Debug, Clone, PartialEq)]
pub enum EventFilter {
    All,
    Only(Vec<String>),
}

impl EventFilter {
    /// Decode the raw `events` parameter value against the shareable ids.
    pub fn from_param(available: &[String], param: Option<&str>) -> Self {
        let Some(raw) = param else {
            return EventFilter::All;
        };
        let selection = ShareSelection::new(available).with_ids(raw.split(','));
        if selection.is_empty() || selection.is_all() {
            EventFilter::All
        } else {
            EventFilter::Only(selection.selected)
        }
    }

    /// Decode from a full invitation URL.
    pub fn from_url(available: &[String], link: &str) -> Result<Self, url::ParseError> {
        let parsed = url::Url::parse(link)?;
        let param = parsed
            .query_pairs()
            .find(|(key, _)| key == EVENTS_PARAM)
            .map(|(_, value)| value.into_owned());
        Ok(Self::from_param(available, param.as_deref()))
    }

    pub fn allows(&self, day: &EventDay) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Only(ids) => day
                .id
                .as_deref()
                .is_some_and(|id| ids.iter().any(|s| s == id)),
        }
    }

    pub fn apply<'a>(&self, days: &'a [EventDay]) -> Vec<&'a EventDay> {
        days.iter().filter(|day| self.allows(day)).collect()
    }
}
