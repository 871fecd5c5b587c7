//! Accent colors keyed by primary language.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn terminal_color(&self) -> colored::Color {
        colored::Color::TrueColor {
            r: self.0,
            g: self.1,
            b: self.2,
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Two-stop gradient used for card glows and the overlay header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accent {
    pub from: Rgb,
    pub to: Rgb,
}

impl Accent {
    const fn new(from: Rgb, to: Rgb) -> Self {
        Self { from, to }
    }

    pub fn css_gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {}, {})",
            self.from.hex(),
            self.to.hex()
        )
    }
}

const BLUE_500: Rgb = Rgb(0x3b, 0x82, 0xf6);
const BLUE_600: Rgb = Rgb(0x25, 0x63, 0xeb);
const CYAN_500: Rgb = Rgb(0x06, 0xb6, 0xd4);
const CYAN_600: Rgb = Rgb(0x08, 0x91, 0xb2);
const YELLOW_500: Rgb = Rgb(0xea, 0xb3, 0x08);
const ORANGE_500: Rgb = Rgb(0xf9, 0x73, 0x16);
const ORANGE_600: Rgb = Rgb(0xea, 0x58, 0x0c);
const RED_500: Rgb = Rgb(0xef, 0x44, 0x44);
const INDIGO_500: Rgb = Rgb(0x63, 0x66, 0xf1);
const INDIGO_600: Rgb = Rgb(0x4f, 0x46, 0xe5);
const GREEN_500: Rgb = Rgb(0x22, 0xc5, 0x5e);
const EMERALD_400: Rgb = Rgb(0x34, 0xd3, 0x99);
const TEAL_500: Rgb = Rgb(0x14, 0xb8, 0xa6);
const PURPLE_600: Rgb = Rgb(0x93, 0x33, 0xea);
const PINK_600: Rgb = Rgb(0xdb, 0x27, 0x77);

pub const DEFAULT_ACCENT: Accent = Accent::new(PURPLE_600, PINK_600);

const ACCENTS: &[(&str, Accent)] = &[
    ("TypeScript", Accent::new(BLUE_600, CYAN_500)),
    ("JavaScript", Accent::new(YELLOW_500, ORANGE_500)),
    ("Python", Accent::new(BLUE_500, YELLOW_500)),
    ("HTML", Accent::new(ORANGE_600, RED_500)),
    ("CSS", Accent::new(BLUE_600, INDIGO_500)),
    ("Vue", Accent::new(GREEN_500, EMERALD_400)),
    ("React", Accent::new(CYAN_500, BLUE_500)),
    ("Dart", Accent::new(TEAL_500, BLUE_500)),
    ("Java", Accent::new(RED_500, ORANGE_600)),
    ("C#", Accent::new(PURPLE_600, INDIGO_600)),
    ("Go", Accent::new(CYAN_600, BLUE_600)),
];

/// Exact, case-sensitive lookup; unmapped and missing languages share
/// the default accent.
pub fn accent_for(language: Option<&str>) -> Accent {
    language
        .and_then(|lang| ACCENTS.iter().find(|(name, _)| *name == lang))
        .map(|(_, accent)| *accent)
        .unwrap_or(DEFAULT_ACCENT)
}

pub fn language_label(language: Option<&str>) -> &str {
    language.unwrap_or("Unknown")
}
