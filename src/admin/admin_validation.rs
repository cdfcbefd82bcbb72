//! Checks run before an invitation is sent to the backend.

use super::admin_types::{AdminError, EventRecord, Invitation};
use chrono::NaiveDate;

/// Empty is allowed; anything else must be `YYYY-MM-DD`.
pub fn validate_optional_date(date: &str) -> bool {
    date.is_empty() || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

pub fn validate_invitation(invitation: &Invitation) -> Result<(), AdminError> {
    if invitation.groom_name.trim().is_empty() || invitation.bride_name.trim().is_empty() {
        return Err(AdminError::Validation(
            "Groom and bride names cannot be empty".to_string(),
        ));
    }
    if !validate_optional_date(&invitation.wedding_date) {
        return Err(AdminError::Validation(format!(
            "Invalid wedding date '{}'. Expected YYYY-MM-DD",
            invitation.wedding_date
        )));
    }
    Ok(())
}

pub fn validate_events(events: &[EventRecord]) -> Result<(), AdminError> {
    for (index, event) in events.iter().enumerate() {
        if event.name.trim().is_empty() {
            return Err(AdminError::Validation(format!(
                "Event #{} has no name",
                index + 1
            )));
        }
        if !validate_optional_date(&event.date) {
            return Err(AdminError::Validation(format!(
                "Event '{}' has invalid date '{}'. Expected YYYY-MM-DD",
                event.name, event.date
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", true ; "empty")]
    #[test_case("2026-02-05", true ; "iso")]
    #[test_case("2026-02-30", false ; "impossible day")]
    #[test_case("05/02/2026", false ; "slashes")]
    #[test_case("Thursday, 5th February 2026", false ; "display date")]
    fn test_validate_optional_date(date: &str, expected: bool) {
        assert_eq!(validate_optional_date(date), expected);
    }

    #[test]
    fn test_validate_invitation() {
        assert!(validate_invitation(&Invitation::default()).is_ok());

        let mut invitation = Invitation::default();
        invitation.bride_name = "  ".to_string();
        assert!(matches!(
            validate_invitation(&invitation),
            Err(AdminError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_events() {
        let mut events = vec![EventRecord::new("Haldi", 0), EventRecord::new("Sangeet", 1)];
        assert!(validate_events(&events).is_ok());

        events[1].date = "tomorrow".to_string();
        let err = validate_events(&events).unwrap_err();
        assert!(err.to_string().contains("Sangeet"));

        events[1].date.clear();
        events[0].name.clear();
        let err = validate_events(&events).unwrap_err();
        assert!(err.to_string().contains("Event #1"));
    }
}
