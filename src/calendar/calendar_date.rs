//! Date stamp extraction for display dates.
//
// Display dates look like "Thursday, 5th February 2026". Only English month names
// and the "<day><suffix> <month> <year>" order are understood.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static ORDINAL_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)(st|nd|rd|th)").expect("valid ordinal regex"));
static DAY_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+(\w+)\s+(\d{4})").expect("valid date regex"));

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

fn month_number(name: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == name).map(|i| i + 1)
}

/// Turn a display date into a `YYYYMMDD` stamp.
///
/// Returns an empty string when the date cannot be read; calendar links are still
/// produced in that case, they just carry no usable date.
pub fn date_stamp(display_date: &str) -> String {
    let lowered = display_date.to_lowercase();
    let cleaned = ORDINAL_SUFFIX.replace_all(&lowered, "$1");

    let stamp = DAY_MONTH_YEAR.captures(&cleaned).and_then(|caps| {
        let month = month_number(&caps[2])?;
        Some(format!("{}{:02}{:0>2}", &caps[3], month, &caps[1]))
    });

    stamp.unwrap_or_else(|| {
        warn!("Could not read a date from '{}'", display_date);
        String::new()
    })
}
