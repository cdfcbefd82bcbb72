use crate::wedding::EventDay;
use serde::Serialize;

/// Photographic illustration shown at the top of an event detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventImage {
    Sakdi,
    Ganesh,
    Baan,
    Haldi,
    Sangeet,
    Wedding,
}

impl EventImage {
    pub fn asset_path(&self) -> &'static str {
        match self {
            EventImage::Sakdi => "assets/sakdi-ritual.png",
            EventImage::Ganesh => "assets/ganesh-idol.png",
            EventImage::Baan => "assets/baan-thali.png",
            EventImage::Haldi => "assets/haldi-couple.png",
            EventImage::Sangeet => "assets/cocktail-couple.png",
            EventImage::Wedding => "assets/wedding-couple.png",
        }
    }
}

// "sakdi" comes first: "Sakdi Vinayak" also contains "vinayak".
const IMAGE_RULES: &[(&[&str], EventImage)] = &[
    (&["sakdi"], EventImage::Sakdi),
    (&["ganesh", "sthabpna", "sthapana", "vinayak"], EventImage::Ganesh),
    (&["baan", "ban"], EventImage::Baan),
    (&["haldi"], EventImage::Haldi),
    (&["sangeet", "cocktail"], EventImage::Sangeet),
    (&["lagan", "barat", "wedding", "panigrahan"], EventImage::Wedding),
];

pub fn image_for_text(text: &str) -> Option<EventImage> {
    IMAGE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, image)| *image)
}

/// `None` means the caller should fall back to its generic couple illustration.
pub fn resolve_image(day: &EventDay) -> Option<EventImage> {
    image_for_text(&day.keyword_text())
}
