use serde::{Deserialize, Serialize};

const RESIDENCE: &str = "At Residence";
const RESIDENCE_ADDRESS: &str = "A-21, Sudama Marg, Vijay Vadi, Path No. 6, Sikar Road, Jaipur";
const IDANTA: &str = "Idanta";
const IDANTA_ADDRESS: &str =
    "Green Triveni, Grand Sikar Road Behind, Ashiana Greens, Jaipur-302048";

/// A single programme item inside an event day.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    /// Free-text display time, e.g. "9:00 am" or "Midnight"
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    pub fn new(name: &str, time: &str) -> Self {
        Self {
            name: name.to_string(),
            time: time.to_string(),
            description: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventDay {
    /// Identifier used by share links (`?events=haldi,sangeet`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Display date, e.g. "Thursday, 5th February 2026"
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl EventDay {
    pub fn new(title: &str, date: &str) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            subtitle: None,
            date: date.to_string(),
            venue: None,
            address: None,
            map_link: None,
            events: Vec::new(),
        }
    }

    /// Title followed by every event name, lower-cased. This is the text the
    /// theme and image resolvers match keywords against.
    pub fn keyword_text(&self) -> String {
        let mut text = self.title.clone();
        for event in &self.events {
            text.push(' ');
            text.push_str(&event.name);
        }
        text.to_lowercase()
    }

    /// Address if known, otherwise the venue name.
    pub fn location(&self) -> Option<&str> {
        self.address
            .as_deref()
            .filter(|a| !a.is_empty())
            .or_else(|| self.venue.as_deref().filter(|v| !v.is_empty()))
    }
}

/// A name line with its caption, e.g. the grandparents' blessing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TitledName {
    pub title: String,
    pub name: String,
}

impl TitledName {
    pub fn new(title: &str, name: &str) -> Self {
        Self {
            title: title.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContactGroup {
    pub title: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl ContactGroup {
    pub fn new(title: &str, names: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            contacts: names
                .iter()
                .map(|name| Contact {
                    name: name.to_string(),
                    phone: None,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Compliments {
    pub title: String,
    #[serde(default)]
    pub names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Firms {
    #[serde(default)]
    pub groom_side: Vec<String>,
    #[serde(default)]
    pub bride_side: Vec<String>,
}

// Plain values first, then tables: TOML cannot place a value after a table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeddingData {
    pub groom_name: String,
    pub bride_name: String,
    pub wedding_date: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub whatsapp_number: String,
    /// How the groom relates to the inviting parents, e.g. "Grand Son"
    #[serde(default)]
    pub groom_parent_relation: String,
    /// Postal address printed on the invitation card
    #[serde(default)]
    pub address: String,
    /// Names of the people extending the invitation
    #[serde(default)]
    pub nimantrak: Vec<String>,
    #[serde(default)]
    pub awaiting_eyes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grandparents: Option<TitledName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groom_parents: Option<TitledName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bride_parents: Option<TitledName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliments: Option<Compliments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maternal: Option<ContactGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firms: Option<Firms>,
    #[serde(default)]
    pub rsvp_contacts: Vec<ContactGroup>,
    #[serde(default)]
    pub event_days: Vec<EventDay>,
}

impl WeddingData {
    pub fn couple(&self) -> String {
        format!("{} & {}", self.groom_name, self.bride_name)
    }

    /// Ids of the days that can be shared, in day order.
    pub fn share_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for id in self.event_days.iter().filter_map(|d| d.id.as_deref()) {
            let id = id.trim();
            if !id.is_empty() && !ids.iter().any(|known| known == id) {
                ids.push(id.to_string());
            }
        }
        ids
    }

    pub fn day(&self, index: usize) -> Option<&EventDay> {
        self.event_days.get(index)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn residence_day(id: &str, date: &str, event: &str, time: &str) -> EventDay {
    EventDay {
        id: Some(id.to_string()),
        venue: Some(RESIDENCE.to_string()),
        address: Some(RESIDENCE_ADDRESS.to_string()),
        events: vec![Event::new(event, time)],
        ..EventDay::new("Programme", date)
    }
}

fn idanta_day(id: &str, title: &str, subtitle: &str, date: &str, events: Vec<Event>) -> EventDay {
    EventDay {
        id: Some(id.to_string()),
        subtitle: Some(subtitle.to_string()),
        venue: Some(IDANTA.to_string()),
        address: Some(IDANTA_ADDRESS.to_string()),
        events,
        ..EventDay::new(title, date)
    }
}

impl Default for WeddingData {
    fn default() -> Self {
        Self {
            groom_name: "Neelesh".to_string(),
            bride_name: "Ayushi".to_string(),
            wedding_date: "Friday, 6th February 2026".to_string(),
            tagline: "A Beginning of Forever".to_string(),
            phone: "9828023034".to_string(),
            whatsapp_number: "919828023034".to_string(),
            groom_parent_relation: "Grand Son".to_string(),
            address: RESIDENCE_ADDRESS.to_string(),
            nimantrak: strings(&["Hari Sankar Agarwal", "Jitendra Agarwal"]),
            awaiting_eyes: strings(&[
                "Tanmay", "Bhavya", "Rudra", "Kavya", "Mukund", "Lakshit", "Nimit", "Harsh",
                "Riya", "Hardik", "Aditi",
            ]),
            grandparents: Some(TitledName::new(
                "With the blessings of",
                "Smt. Chandrakala & Sh. Hari Shankar Agarwal",
            )),
            groom_parents: Some(TitledName::new(
                "Parents of the Groom",
                "Smt. Anita & Sh. Jitendra Agarwal",
            )),
            bride_parents: Some(TitledName::new("D/o", "Smt. Hansa & Sh. Anil Ji Goyal")),
            compliments: Some(Compliments {
                title: "Warm Regards".to_string(),
                names: strings(&["Raj Kumar- Gita"]),
            }),
            maternal: Some(ContactGroup::new("Maternal", &["Arun- Meenu", "Amit- Ritu"])),
            firms: Some(Firms {
                groom_side: strings(&[
                    "Shri Govind Associates",
                    "Vijay Distributors",
                    "Shri Govind Marketing",
                    "Shri Govind Traders",
                    "Shri Lokesh Enterprises",
                    "Agarwal Exim",
                ]),
                bride_side: strings(&[
                    "Shree Ram Medical & General Store",
                    "Toshit Distributors",
                    "Toshit Surgical & Pharmaceuticals",
                    "G Pharma",
                    "Gats Biotech Pvt. Ltd.",
                ]),
            }),
            rsvp_contacts: vec![
                ContactGroup::new(
                    "RSVP",
                    &[
                        "Krishna Kumar- Manisha",
                        "Ashish- Ashtha",
                        "Arvind- Sonia",
                        "Amrit- Meena",
                        "Manohar",
                    ],
                ),
                ContactGroup::new(
                    "Special Request",
                    &[
                        "Kanchan- Ajit Ji Goyal",
                        "Mamta- Rajesh Ji Agarwal",
                        "Shashi- Sushil Ji Agarwal",
                        "Archna- Sanjay Ji Agarwal",
                        "Mukul- Ravi Ji Agarwal",
                    ],
                ),
                ContactGroup::new(
                    "With Best Compliments From",
                    &["Mohan Lal & Kiran", "All Shobharam Ji Ka Parivar"],
                ),
            ],
            event_days: vec![
                residence_day("ganesh", "Saturday, 31st January 2026", "Ganesh Sthapana", "9:00 am"),
                residence_day("baan", "Monday, 2nd February 2026", "Baan", "10:15 am"),
                residence_day("sakdi", "Wednesday, 4th February 2026", "Sakdi Vinayak", "11:15 am"),
                idanta_day(
                    "haldi",
                    "Haldi Ceremony",
                    "Come together as we playfully apply Haldi and bless our couple in the colors of purity!",
                    "Thursday, 5th February 2026",
                    vec![
                        Event::new("Haldi", "11:00 am"),
                        Event::new("Lunch", "1:00 pm"),
                        Event::new("Tilak", "5:15 pm"),
                    ],
                ),
                idanta_day(
                    "sangeet",
                    "Lights, Camera, Sangeet",
                    "Step into a Bollywood Blockbuster Night where music, camera, dance and filmy-style celebrations light up the stage!",
                    "Thursday, 5th February 2026",
                    vec![Event::new("Sangeet Ceremony", "7:00 pm")],
                ),
                idanta_day(
                    "lagan",
                    "Lagan-Laagi-Re",
                    "Witness the sacred exchange of Vows as the couple seal their union in love and commitment!",
                    "Friday, 6th February 2026",
                    vec![
                        Event::new("Bhaat", "11:00 am"),
                        Event::new("Lunch", "1:00 pm"),
                        Event::new("Nikasi", "6:15 pm"),
                        Event::new("Dinner", "8:00 pm"),
                        Event::new("Panigrahan Sanskar", "Midnight"),
                    ],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyword_text_joins_title_and_events() {
        let mut day = EventDay::new("Programme", "Monday, 2nd February 2026");
        day.events.push(Event::new("Sakdi Vinayak", "11:15 am"));
        day.events.push(Event::new("Lunch", "1:00 pm"));

        assert_eq!(day.keyword_text(), "programme sakdi vinayak lunch");
    }

    #[test]
    fn test_location_prefers_address() {
        let mut day = EventDay::new("Haldi", "");
        assert_eq!(day.location(), None);

        day.venue = Some("Idanta".to_string());
        assert_eq!(day.location(), Some("Idanta"));

        day.address = Some(String::new());
        assert_eq!(day.location(), Some("Idanta"));

        day.address = Some("Jaipur".to_string());
        assert_eq!(day.location(), Some("Jaipur"));
    }

    #[test]
    fn test_default_wedding_has_six_shareable_days() {
        let data = WeddingData::default();
        let ids: Vec<_> = data.event_days.iter().filter_map(|d| d.id.as_deref()).collect();
        assert_eq!(ids, vec!["ganesh", "baan", "sakdi", "haldi", "sangeet", "lagan"]);
        assert_eq!(data.couple(), "Neelesh & Ayushi");
        assert_eq!(data.share_ids(), ids);
    }

    #[test]
    fn test_share_ids_skip_missing_and_duplicate_ids() {
        let mut data = WeddingData::default();
        data.event_days.push(EventDay::new("Reception", "Saturday, 7th February 2026"));
        let mut repeat = EventDay::new("Haldi Again", "");
        repeat.id = Some(" haldi ".to_string());
        data.event_days.push(repeat);

        assert_eq!(data.share_ids().len(), 6);
    }

    #[test]
    fn test_default_invitation_card_data() {
        let data = WeddingData::default();
        assert_eq!(data.groom_parent_relation, "Grand Son");
        assert_eq!(data.nimantrak, vec!["Hari Sankar Agarwal", "Jitendra Agarwal"]);
        assert_eq!(data.awaiting_eyes.len(), 11);
        assert_eq!(
            data.rsvp_contacts.iter().map(|g| g.title.as_str()).collect::<Vec<_>>(),
            vec!["RSVP", "Special Request", "With Best Compliments From"]
        );
        assert_eq!(data.firms.as_ref().map(|f| f.bride_side.len()), Some(5));
    }
}
