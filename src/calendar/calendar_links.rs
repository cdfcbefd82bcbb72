//! Add-to-calendar links for a single programme item.

use crate::calendar::calendar_date::date_stamp;
use crate::links::encode_component;
use crate::wedding::{Event, EventDay};
use serde::Serialize;

const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";
const ICS_DATA_URI_PREFIX: &str = "data:text/calendar;charset=utf-8,";

/// All-day calendar entry derived from an event and the day it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEntry {
    pub title: String,
    /// `YYYYMMDD`, empty when the day's display date could not be read
    pub date_stamp: String,
    pub location: String,
    pub details: String,
}

impl CalendarEntry {
    pub fn new(day: &EventDay, event: &Event) -> Self {
        Self {
            title: format!("{} - {}", event.name, day.title),
            date_stamp: date_stamp(&day.date),
            location: day.location().unwrap_or_default().to_string(),
            details: day
                .subtitle
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format!("{} ceremony", event.name)),
        }
    }

    /// Google Calendar "render" link. Start and end are the same day.
    pub fn google_url(&self) -> String {
        format!(
            "{}?action=TEMPLATE&text={}&dates={}/{}&location={}&details={}",
            GOOGLE_CALENDAR_URL,
            encode_component(&self.title),
            self.date_stamp,
            self.date_stamp,
            encode_component(&self.location),
            encode_component(&self.details)
        )
    }

    pub fn ics(&self) -> String {
        [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("DTSTART:{}", self.date_stamp),
            format!("DTEND:{}", self.date_stamp),
            format!("SUMMARY:{}", self.title),
            format!("LOCATION:{}", self.location),
            format!("DESCRIPTION:{}", self.details),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ]
        .join("\n")
    }

    /// The ICS payload as a data URI, for calendar apps that import files.
    pub fn ics_data_uri(&self) -> String {
        format!("{}{}", ICS_DATA_URI_PREFIX, encode_component(&self.ics()))
    }

    pub fn link(&self, provider: CalendarProvider) -> String {
        match provider {
            CalendarProvider::Google => self.google_url(),
            CalendarProvider::Ics => self.ics_data_uri(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarProvider {
    #[default]
    Google,
    /// Apple Calendar, Outlook and anything else that opens `.ics` files
    Ics,
}

pub fn google_calendar_url(day: &EventDay, event: &Event) -> String {
    CalendarEntry::new(day, event).google_url()
}

pub fn ics_data_uri(day: &EventDay, event: &Event) -> String {
    CalendarEntry::new(day, event).ics_data_uri()
}
