//! Map and messaging links, plus the shared URL component encoder.

use crate::wedding::EventDay;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const MAPS_SEARCH_URL: &str = "https://maps.google.com/?q=";
const WHATSAPP_URL: &str = "https://wa.me/";

/// Same unreserved set as JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Explicit link wins; otherwise a search for the given address text.
pub fn map_link(address: &str, explicit: Option<&str>) -> String {
    match explicit {
        Some(link) if !link.is_empty() => link.to_string(),
        _ => format!("{}{}", MAPS_SEARCH_URL, encode_component(address)),
    }
}

/// Map link for a day's venue, `None` when the day has neither a map link nor
/// anything to search for.
pub fn day_map_link(day: &EventDay) -> Option<String> {
    match (day.map_link.as_deref(), day.location()) {
        (Some(link), _) if !link.is_empty() => Some(link.to_string()),
        (_, Some(location)) => Some(map_link(location, None)),
        _ => None,
    }
}

pub fn invitation_message(couple: &str, link: &str) -> String {
    format!(
        "✨ You're Invited! ✨\n\nJoin us for the wedding celebration of {}!\n\n🔗 {}",
        couple, link
    )
}

pub fn whatsapp_share_link(message: &str) -> String {
    format!("{}?text={}", WHATSAPP_URL, encode_component(message))
}

/// Direct chat link. Everything except digits is dropped from the number.
pub fn whatsapp_contact_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("{}{}", WHATSAPP_URL, digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("A-21, Sudama Marg"), "A-21%2C%20Sudama%20Marg");
        assert_eq!(encode_component("it's (fun)!*~._"), "it's%20(fun)!*~._");
        assert_eq!(encode_component("a/b?c=d&e#f"), "a%2Fb%3Fc%3Dd%26e%23f");
        assert_eq!(encode_component("✨"), "%E2%9C%A8");
    }

    #[test]
    fn test_map_link_returns_explicit_link_verbatim() {
        let explicit = "https://goo.gl/maps/xyz?x=1 2";
        assert_eq!(map_link("Jaipur", Some(explicit)), explicit);
    }

    #[test]
    fn test_map_link_falls_back_to_search() {
        assert_eq!(
            map_link("Idanta, Jaipur-302048", None),
            "https://maps.google.com/?q=Idanta%2C%20Jaipur-302048"
        );
        assert_eq!(map_link("Jaipur", Some("")), "https://maps.google.com/?q=Jaipur");
    }

    #[test]
    fn test_day_map_link() {
        let mut day = EventDay::new("Haldi", "");
        assert_eq!(day_map_link(&day), None);

        day.venue = Some("Idanta".to_string());
        assert_eq!(day_map_link(&day).as_deref(), Some("https://maps.google.com/?q=Idanta"));

        day.map_link = Some("https://maps.app/idanta".to_string());
        assert_eq!(day_map_link(&day).as_deref(), Some("https://maps.app/idanta"));
    }

    #[test]
    fn test_whatsapp_links() {
        assert_eq!(whatsapp_contact_link("+91 98280-23034"), "https://wa.me/919828023034");
        assert_eq!(
            whatsapp_share_link("Hi there\n"),
            "https://wa.me/?text=Hi%20there%0A"
        );
    }

    #[test]
    fn test_invitation_message() {
        let message = invitation_message("Neelesh & Ayushi", "https://example.com");
        assert!(message.starts_with("✨ You're Invited! ✨\n\n"));
        assert!(message.contains("celebration of Neelesh & Ayushi!"));
        assert!(message.ends_with("🔗 https://example.com"));
    }
}
