use anyhow::{anyhow, Result};

use crate::calendar::{CalendarEntry, CalendarProvider};
use crate::config::Config;
use crate::links::{day_map_link, invitation_message, whatsapp_contact_link, whatsapp_share_link};
use crate::presentation::{present_day, present_invitation, present_wedding};
use crate::share::{EventFilter, ShareSelection};
use crate::wedding::EventDay;

fn day_at(config: &Config, index: usize) -> Result<&EventDay> {
    config.wedding.day(index).ok_or_else(|| {
        anyhow!(
            "No event day at index {} ({} days configured)",
            index,
            config.wedding.event_days.len()
        )
    })
}

pub fn list_days(config: &Config, events: Option<&str>) -> Result<()> {
    let filter = EventFilter::from_param(&config.wedding.share_ids(), events);
    let views = present_wedding(&config.wedding, &filter);

    println!("{} - {}", config.wedding.couple(), config.wedding.wedding_date);
    if views.is_empty() {
        println!("  No event days match the selection.");
    }
    for (i, view) in views.iter().enumerate() {
        println!("\n{}. {}", i + 1, view.display());
    }
    Ok(())
}

pub fn show_day(config: &Config, index: usize) -> Result<()> {
    let view = present_day(day_at(config, index)?);
    println!("{}", view.display());
    println!("   Palette: {} / {}", view.theme.primary, view.theme.secondary);
    for event in &view.events {
        println!("\n   {}", event.event.name);
        println!("     Google Calendar: {}", event.google_calendar_url);
        println!("     Calendar file:   {}", event.ics_data_uri);
    }
    Ok(())
}

pub fn show_invitation(config: &Config) -> Result<()> {
    println!("{}", present_invitation(&config.wedding).display());
    Ok(())
}

pub fn calendar_link(
    config: &Config,
    day_index: usize,
    event_index: usize,
    provider: CalendarProvider,
) -> Result<()> {
    let day = day_at(config, day_index)?;
    let event = day
        .events
        .get(event_index)
        .ok_or_else(|| anyhow!("'{}' has no event at index {}", day.title, event_index))?;

    let entry = CalendarEntry::new(day, event);
    if entry.date_stamp.is_empty() {
        println!("⚠️  Could not read a date from '{}'; the link has no date.", day.date);
    }
    println!("{}", entry.link(provider));
    Ok(())
}

pub fn map(config: &Config, index: usize) -> Result<()> {
    let day = day_at(config, index)?;
    match day_map_link(day) {
        Some(link) => println!("{}", link),
        None => println!("'{}' has no venue or address.", day.title),
    }
    Ok(())
}

pub fn share(config: &Config, events: &[String], base: Option<&str>) -> Result<()> {
    let selection = ShareSelection::for_wedding(&config.wedding).with_ids(events);
    let ignored: Vec<_> = events
        .iter()
        .filter(|id| !selection.is_known(id.trim()))
        .collect();
    if !ignored.is_empty() {
        println!("⚠️  Ignoring unknown event ids: {:?}", ignored);
    }
    println!("{}", selection.link(base.unwrap_or(&config.site.base_url)));
    Ok(())
}

pub fn whatsapp(config: &Config, contact: bool, events: &[String]) -> Result<()> {
    if contact {
        if config.wedding.whatsapp_number.is_empty() {
            return Err(anyhow!("wedding.whatsapp_number is not configured"));
        }
        println!("{}", whatsapp_contact_link(&config.wedding.whatsapp_number));
        return Ok(());
    }

    let link = ShareSelection::for_wedding(&config.wedding)
        .with_ids(events)
        .link(&config.site.base_url);
    let message = invitation_message(&config.wedding.couple(), &link);
    println!("{}", whatsapp_share_link(&message));
    Ok(())
}
