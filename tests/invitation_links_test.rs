use anyhow::Result;
use percent_encoding::percent_decode_str;
use pretty_assertions::assert_eq;
use std::io::BufReader;

use vivah::calendar::CalendarEntry;
use vivah::links::{day_map_link, invitation_message, whatsapp_contact_link, whatsapp_share_link};
use vivah::theme::ThemeKind;
use vivah::{present_wedding, Event, EventDay, EventFilter, ShareSelection, WeddingData};

const ORIGIN: &str = "https://neelesh-weds-ayushi.example";

#[test]
fn test_default_days_resolve_expected_themes() {
    let data = WeddingData::default();
    let views = present_wedding(&data, &EventFilter::All);

    let themes: Vec<_> = views.iter().map(|v| v.theme.theme).collect();
    assert_eq!(
        themes,
        vec![
            ThemeKind::Ganesh,
            ThemeKind::Baan,
            ThemeKind::Ganesh,
            ThemeKind::Haldi,
            ThemeKind::Sangeet,
            ThemeKind::Barat,
        ]
    );
}

#[test]
fn test_haldi_google_calendar_link() {
    let data = WeddingData::default();
    let haldi = &data.event_days[3];
    let entry = CalendarEntry::new(haldi, &haldi.events[0]);

    assert_eq!(entry.date_stamp, "20260205");
    let url = entry.google_url();
    assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE&text=Haldi%20-%20Haldi%20Ceremony&"));
    assert!(url.contains("&dates=20260205/20260205&"));
    assert!(url.contains("&location=Green%20Triveni%2C%20Grand%20Sikar%20Road"));
}

#[test]
fn test_lagan_ics_parses_as_calendar() -> Result<()> {
    let data = WeddingData::default();
    let lagan = &data.event_days[5];
    let uri = CalendarEntry::new(lagan, &lagan.events[4]).ics_data_uri();

    let payload = uri
        .strip_prefix("data:text/calendar;charset=utf-8,")
        .expect("data uri prefix");
    let ics = percent_decode_str(payload).decode_utf8()?.into_owned();
    assert!(ics.contains("DTSTART:20260206\nDTEND:20260206"));

    let mut parser = ical::IcalParser::new(BufReader::new(ics.as_bytes()));
    let calendar = parser.next().expect("one calendar").expect("valid ics");
    assert_eq!(calendar.events.len(), 1);

    let summary = calendar.events[0]
        .properties
        .iter()
        .find(|p| p.name == "SUMMARY")
        .and_then(|p| p.value.clone());
    assert_eq!(summary.as_deref(), Some("Panigrahan Sanskar - Lagan-Laagi-Re"));
    Ok(())
}

#[test]
fn test_residence_map_link_searches_address() {
    let data = WeddingData::default();
    assert_eq!(
        day_map_link(&data.event_days[0]).as_deref(),
        Some("https://maps.google.com/?q=A-21%2C%20Sudama%20Marg%2C%20Vijay%20Vadi%2C%20Path%20No.%206%2C%20Sikar%20Road%2C%20Jaipur")
    );
}

#[test]
fn test_share_link_round_trip_filters_days() -> Result<()> {
    let data = WeddingData::default();
    let link = ShareSelection::for_wedding(&data)
        .with_ids(["haldi", "sangeet"])
        .link(ORIGIN);
    assert_eq!(link, format!("{}?events=haldi,sangeet", ORIGIN));

    let filter = EventFilter::from_url(&data.share_ids(), &link)?;
    let titles: Vec<_> = present_wedding(&data, &filter)
        .into_iter()
        .map(|v| v.title)
        .collect();
    assert_eq!(titles, vec!["Haldi Ceremony", "Lights, Camera, Sangeet"]);
    Ok(())
}

#[test]
fn test_full_selection_shares_bare_origin() -> Result<()> {
    let data = WeddingData::default();
    let mut selection = ShareSelection::for_wedding(&data);
    selection.toggle_all();
    assert_eq!(selection.link(ORIGIN), ORIGIN);
    assert_eq!(EventFilter::from_url(&data.share_ids(), ORIGIN)?, EventFilter::All);
    Ok(())
}

#[test]
fn test_configured_day_round_trips_through_share_link() -> Result<()> {
    let mut data = WeddingData::default();
    let mut reception = EventDay::new("Reception", "Saturday, 7th February 2026");
    reception.id = Some("reception".to_string());
    reception.events.push(Event::new("Dinner", "8:00 pm"));
    data.event_days.push(reception);

    let link = ShareSelection::for_wedding(&data)
        .with_ids(["reception"])
        .link(ORIGIN);
    let filter = EventFilter::from_url(&data.share_ids(), &link)?;
    let titles: Vec<_> = present_wedding(&data, &filter)
        .into_iter()
        .map(|v| v.title)
        .collect();
    assert_eq!(titles, vec!["Reception"]);
    Ok(())
}

#[test]
fn test_whatsapp_links() {
    let data = WeddingData::default();
    assert_eq!(whatsapp_contact_link(&data.whatsapp_number), "https://wa.me/919828023034");

    let message = invitation_message(&data.couple(), ORIGIN);
    let link = whatsapp_share_link(&message);
    assert!(link.starts_with("https://wa.me/?text=%E2%9C%A8%20You're%20Invited!%20%E2%9C%A8"));
    assert!(link.ends_with("%F0%9F%94%97%20https%3A%2F%2Fneelesh-weds-ayushi.example"));
}
