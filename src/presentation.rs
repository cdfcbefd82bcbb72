//! Detail views for event days: everything the events timeline needs to draw a
//! day card and its detail modal.

use crate::calendar::CalendarEntry;
use crate::image::{resolve_image, EventImage};
use crate::links::{day_map_link, whatsapp_contact_link};
use crate::share::EventFilter;
use crate::theme::{resolve_theme, Theme};
use crate::wedding::{Compliments, ContactGroup, Event, EventDay, Firms, TitledName, WeddingData};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub google_calendar_url: String,
    pub ics_data_uri: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub date: String,
    pub venue: Option<String>,
    pub address: Option<String>,
    pub theme: Theme,
    pub image: Option<EventImage>,
    pub image_path: Option<&'static str>,
    pub map_link: Option<String>,
    pub events: Vec<EventView>,
}

pub fn present_day(day: &EventDay) -> DayView {
    let image = resolve_image(day);
    let events = day
        .events
        .iter()
        .map(|event| {
            let entry = CalendarEntry::new(day, event);
            EventView {
                event: event.clone(),
                google_calendar_url: entry.google_url(),
                ics_data_uri: entry.ics_data_uri(),
            }
        })
        .collect();

    DayView {
        id: day.id.clone(),
        title: day.title.clone(),
        subtitle: day.subtitle.clone(),
        date: day.date.clone(),
        venue: day.venue.clone(),
        address: day.address.clone(),
        theme: resolve_theme(day),
        image,
        image_path: image.map(|i| i.asset_path()),
        map_link: day_map_link(day),
        events,
    }
}

pub fn present_wedding(data: &WeddingData, filter: &EventFilter) -> Vec<DayView> {
    filter.apply(&data.event_days).into_iter().map(present_day).collect()
}

impl DayView {
    /// Plain-text card for terminal output.
    pub fn display(&self) -> String {
        let mut output = format!("{} [{} theme]\n   {}", self.title, self.theme.theme, self.date);

        if let Some(subtitle) = &self.subtitle {
            output.push_str(&format!("\n   {}", subtitle));
        }

        for event in &self.events {
            output.push_str(&format!("\n   - {} ({})", event.event.name, event.event.time));
            if let Some(description) = &event.event.description {
                output.push_str(&format!(": {}", description));
            }
        }

        match (&self.venue, &self.address) {
            (Some(venue), Some(address)) => {
                output.push_str(&format!("\n   Venue: {}, {}", venue, address))
            }
            (Some(place), None) | (None, Some(place)) => {
                output.push_str(&format!("\n   Venue: {}", place))
            }
            (None, None) => {}
        }

        if let Some(link) = &self.map_link {
            output.push_str(&format!("\n   Map: {}", link));
        }

        if let Some(path) = self.image_path {
            output.push_str(&format!("\n   Image: {}", path));
        }

        output
    }
}

/// Invitation card and RSVP block for the whole wedding.
#[derive(Debug, Clone, Serialize)]
pub struct InvitationView {
    pub groom_name: String,
    pub bride_name: String,
    pub wedding_date: String,
    pub tagline: String,
    pub grandparents: Option<TitledName>,
    pub groom_parents: Option<TitledName>,
    pub invitation_line: String,
    pub bride_parents: Option<TitledName>,
    pub nimantrak: Vec<String>,
    pub address: String,
    pub phone: String,
    pub rsvp_contacts: Vec<ContactGroup>,
    pub compliments: Option<Compliments>,
    pub awaiting_eyes: Vec<String>,
    pub maternal: Option<ContactGroup>,
    pub firms: Option<Firms>,
    /// Direct WhatsApp chat for confirmations
    pub rsvp_link: Option<String>,
}

pub fn present_invitation(data: &WeddingData) -> InvitationView {
    let invitation_line = format!(
        "Request the honour of your presence at the marriage of their {}",
        data.groom_parent_relation
    )
    .trim_end()
    .to_string();

    InvitationView {
        groom_name: data.groom_name.clone(),
        bride_name: data.bride_name.clone(),
        wedding_date: data.wedding_date.clone(),
        tagline: data.tagline.clone(),
        grandparents: data.grandparents.clone(),
        groom_parents: data.groom_parents.clone(),
        invitation_line,
        bride_parents: data.bride_parents.clone(),
        nimantrak: data.nimantrak.clone(),
        address: data.address.clone(),
        phone: data.phone.clone(),
        rsvp_contacts: data.rsvp_contacts.clone(),
        compliments: data.compliments.clone(),
        awaiting_eyes: data.awaiting_eyes.clone(),
        maternal: data.maternal.clone(),
        firms: data.firms.clone(),
        rsvp_link: Some(&data.whatsapp_number)
            .filter(|n| !n.is_empty())
            .map(|n| whatsapp_contact_link(n)),
    }
}

fn push_group(output: &mut String, group: &ContactGroup) {
    output.push_str(&format!("\n\n{}", group.title));
    for contact in &group.contacts {
        match &contact.phone {
            Some(phone) => output.push_str(&format!("\n   - {} - {}", contact.name, phone)),
            None => output.push_str(&format!("\n   - {}", contact.name)),
        }
    }
}

impl InvitationView {
    /// Plain-text invitation card followed by the RSVP contacts.
    pub fn display(&self) -> String {
        let mut output = String::from("॥ श्री गणेशाय नमः ॥");

        for line in [&self.grandparents, &self.groom_parents].into_iter().flatten() {
            output.push_str(&format!("\n\n{}\n   {}", line.name, line.title));
        }

        output.push_str(&format!(
            "\n\n{}\n\n   {}\n   with\n   {}",
            self.invitation_line, self.groom_name, self.bride_name
        ));
        if let Some(parents) = &self.bride_parents {
            output.push_str(&format!("\n   {} {}", parents.title, parents.name));
        }

        output.push_str(&format!("\n\non {}", self.wedding_date));

        if !self.nimantrak.is_empty() {
            output.push_str(&format!("\n\nNimantrak: {}", self.nimantrak.join(", ")));
        }
        if !self.address.is_empty() {
            output.push_str(&format!("\n{}", self.address));
        }
        if !self.phone.is_empty() {
            output.push_str(&format!("\nMob: {}", self.phone));
        }

        for group in &self.rsvp_contacts {
            push_group(&mut output, group);
        }
        if let Some(compliments) = &self.compliments {
            output.push_str(&format!(
                "\n\n{}: {}",
                compliments.title,
                compliments.names.join(", ")
            ));
        }
        if !self.awaiting_eyes.is_empty() {
            output.push_str(&format!("\n\nAwaiting Eyes: {}", self.awaiting_eyes.join(", ")));
        }
        if let Some(maternal) = &self.maternal {
            push_group(&mut output, maternal);
        }
        if let Some(firms) = &self.firms {
            output.push_str("\n\nFirms");
            output.push_str(&format!("\n   Groom Side: {}", firms.groom_side.join(", ")));
            output.push_str(&format!("\n   Bride Side: {}", firms.bride_side.join(", ")));
        }
        if let Some(link) = &self.rsvp_link {
            output.push_str(&format!("\n\nKindly confirm your presence: {}", link));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_present_default_haldi_day() {
        let data = WeddingData::default();
        let view = present_day(&data.event_days[3]);

        assert_eq!(view.theme.theme, ThemeKind::Haldi);
        assert_eq!(view.image, Some(EventImage::Haldi));
        assert_eq!(view.events.len(), 3);
        assert!(view.events[0]
            .google_calendar_url
            .contains("&dates=20260205/20260205&"));
        assert!(view
            .map_link
            .as_deref()
            .unwrap()
            .starts_with("https://maps.google.com/?q=Green%20Triveni"));
    }

    #[test]
    fn test_present_wedding_respects_filter() {
        let data = WeddingData::default();
        assert_eq!(present_wedding(&data, &EventFilter::All).len(), 6);

        let only = EventFilter::Only(vec!["sakdi".to_string()]);
        let views = present_wedding(&data, &only);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].image, Some(EventImage::Sakdi));
        assert_eq!(views[0].theme.theme, ThemeKind::Ganesh);
    }

    #[test]
    fn test_display_lists_events_and_venue() {
        let data = WeddingData::default();
        let text = present_day(&data.event_days[4]).display();

        assert!(text.starts_with("Lights, Camera, Sangeet [sangeet theme]"));
        assert!(text.contains("- Sangeet Ceremony (7:00 pm)"));
        assert!(text.contains("Venue: Idanta, Green Triveni"));
        assert!(text.contains("Image: assets/cocktail-couple.png"));
    }

    #[test]
    fn test_invitation_card_and_rsvp_text() {
        let data = WeddingData::default();
        let view = present_invitation(&data);
        assert_eq!(
            view.invitation_line,
            "Request the honour of your presence at the marriage of their Grand Son"
        );
        assert_eq!(view.rsvp_link.as_deref(), Some("https://wa.me/919828023034"));

        let text = view.display();
        assert!(text.contains("Smt. Chandrakala & Sh. Hari Shankar Agarwal\n   With the blessings of"));
        assert!(text.contains("   Neelesh\n   with\n   Ayushi\n   D/o Smt. Hansa & Sh. Anil Ji Goyal"));
        assert!(text.contains("on Friday, 6th February 2026"));
        assert!(text.contains("Nimantrak: Hari Sankar Agarwal, Jitendra Agarwal"));
        assert!(text.contains("Mob: 9828023034"));
        assert!(text.contains("Special Request\n   - Kanchan- Ajit Ji Goyal"));
        assert!(text.contains("Warm Regards: Raj Kumar- Gita"));
        assert!(text.contains("Awaiting Eyes: Tanmay, Bhavya"));
        assert!(text.contains("Maternal\n   - Arun- Meenu\n   - Amit- Ritu"));
        assert!(text.contains("Bride Side: Shree Ram Medical & General Store"));
    }

    #[test]
    fn test_sparse_invitation_omits_empty_sections() {
        let mut data = WeddingData::default();
        data.groom_parent_relation.clear();
        data.whatsapp_number.clear();
        data.grandparents = None;
        data.firms = None;
        data.rsvp_contacts.clear();

        let view = present_invitation(&data);
        assert_eq!(
            view.invitation_line,
            "Request the honour of your presence at the marriage of their"
        );
        assert_eq!(view.rsvp_link, None);

        let text = view.display();
        assert!(!text.contains("With the blessings of"));
        assert!(!text.contains("Firms"));
        assert!(!text.contains("RSVP"));
    }
}
