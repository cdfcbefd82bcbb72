//! Keyword-driven visual themes for event days.
//!
//! A day's title and event names are matched against an ordered rule list. The
//! first rule with a matching keyword decides the theme, so rule order is part of
//! the contract: a day named "Haldi & Sangeet" is a haldi day.

use crate::wedding::EventDay;
use log::debug;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Haldi,
    Mehndi,
    Ganesh,
    Baan,
    Sangeet,
    Barat,
    Traditional,
}

impl ThemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Haldi => "haldi",
            ThemeKind::Mehndi => "mehndi",
            ThemeKind::Ganesh => "ganesh",
            ThemeKind::Baan => "baan",
            ThemeKind::Sangeet => "sangeet",
            ThemeKind::Barat => "barat",
            ThemeKind::Traditional => "traditional",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decorative illustration drawn around an event detail card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Illustration {
    Marigold,
    Mehendi,
    Ganesh,
    Turmeric,
    Music,
    Dholak,
    Horse,
    Kalash,
    FilmReel,
    Camera,
    Spotlight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub theme: ThemeKind,
    pub primary: &'static str,
    pub secondary: &'static str,
    /// Background gradient classes
    pub bg: &'static str,
    pub border: &'static str,
    pub header_bg: &'static str,
    pub text_color: &'static str,
    pub icon_color: &'static str,
    pub illustrations: &'static [Illustration],
}

impl Theme {
    /// Illustration for a decoration slot. Slots past the end of the list reuse
    /// the first illustration.
    pub fn illustration(&self, slot: usize) -> Illustration {
        self.illustrations
            .get(slot)
            .or_else(|| self.illustrations.first())
            .copied()
            .unwrap_or(Illustration::Marigold)
    }
}

const HALDI: Theme = Theme {
    theme: ThemeKind::Haldi,
    primary: "#fbbf24",
    secondary: "#ca8a04",
    bg: "from-yellow-50 via-amber-50 to-yellow-100",
    border: "border-yellow-400",
    header_bg: "bg-gradient-to-r from-yellow-400 to-amber-500",
    text_color: "text-yellow-800",
    icon_color: "text-yellow-600",
    illustrations: &[Illustration::Turmeric, Illustration::Marigold, Illustration::Kalash],
};

const MEHNDI: Theme = Theme {
    theme: ThemeKind::Mehndi,
    primary: "#22c55e",
    secondary: "#15803d",
    bg: "from-green-50 via-emerald-50 to-green-100",
    border: "border-green-500",
    header_bg: "bg-gradient-to-r from-green-500 to-emerald-600",
    text_color: "text-green-800",
    icon_color: "text-green-600",
    illustrations: &[Illustration::Mehendi, Illustration::Marigold],
};

const GANESH: Theme = Theme {
    theme: ThemeKind::Ganesh,
    primary: "#f97316",
    secondary: "#c2410c",
    bg: "from-orange-50 via-amber-50 to-orange-100",
    border: "border-orange-400",
    header_bg: "bg-gradient-to-r from-orange-400 to-red-500",
    text_color: "text-orange-900",
    icon_color: "text-orange-600",
    illustrations: &[Illustration::Ganesh, Illustration::Kalash, Illustration::Marigold],
};

const BAAN: Theme = Theme {
    theme: ThemeKind::Baan,
    primary: "#fb923c",
    secondary: "#9a3412",
    bg: "from-rose-50 via-orange-50 to-amber-100",
    border: "border-rose-400",
    header_bg: "bg-gradient-to-r from-rose-400 to-orange-500",
    text_color: "text-rose-900",
    icon_color: "text-rose-600",
    illustrations: &[Illustration::Kalash, Illustration::Turmeric, Illustration::Marigold],
};

const SANGEET: Theme = Theme {
    theme: ThemeKind::Sangeet,
    primary: "#3b82f6",
    secondary: "#1e40af",
    bg: "from-indigo-50 via-blue-50 to-purple-100",
    border: "border-blue-500",
    header_bg: "bg-gradient-to-r from-blue-600 to-purple-600",
    text_color: "text-blue-900",
    icon_color: "text-blue-600",
    illustrations: &[
        Illustration::FilmReel,
        Illustration::Camera,
        Illustration::Spotlight,
        Illustration::Music,
    ],
};

const BARAT: Theme = Theme {
    theme: ThemeKind::Barat,
    primary: "#e11d48",
    secondary: "#9f1239",
    bg: "from-rose-50 via-pink-50 to-red-100",
    border: "border-rose-500",
    header_bg: "bg-gradient-to-r from-rose-600 to-red-700",
    text_color: "text-rose-900",
    icon_color: "text-rose-600",
    illustrations: &[Illustration::Horse, Illustration::Dholak, Illustration::Marigold],
};

const TRADITIONAL: Theme = Theme {
    theme: ThemeKind::Traditional,
    primary: "#f59e0b",
    secondary: "#b45309",
    bg: "from-amber-50 via-yellow-50 to-orange-50",
    border: "border-amber-400",
    header_bg: "bg-gradient-to-r from-amber-500 to-yellow-600",
    text_color: "text-amber-900",
    icon_color: "text-amber-600",
    illustrations: &[Illustration::Marigold, Illustration::Kalash],
};

/// Ordered (keywords, theme) rules. Evaluated top to bottom; first hit wins.
const THEME_RULES: &[(&[&str], &Theme)] = &[
    (&["haldi"], &HALDI),
    (&["mehndi", "mehendi"], &MEHNDI),
    (&["ganesh", "sthapana", "sthabpna", "vinayak", "sakdi"], &GANESH),
    (&["baan", "ban"], &BAAN),
    (&["sangeet", "music", "dance", "camera", "lights"], &SANGEET),
    (&["barat", "nikasi", "lagan", "panigrahan", "wedding"], &BARAT),
];

/// Resolve a theme from already lower-cased keyword text.
pub fn theme_for_text(text: &str) -> Theme {
    THEME_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, theme)| (*theme).clone())
        .unwrap_or(TRADITIONAL)
}

pub fn resolve_theme(day: &EventDay) -> Theme {
    let theme = theme_for_text(&day.keyword_text());
    debug!("Resolved theme '{}' for day '{}'", theme.theme, day.title);
    theme
}
