//! Theme Registry - Symbolic Colors
//!
//! Layout code refers to colors by name; the registry turns names into
//! concrete values. A registry is built once and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{DeckError, Result};

/// A concrete 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected six hex digits, got '{}'", s));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid hex color '{}'", s))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;
    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

/// A color as written by callers: a theme name, or `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorRef {
    Theme(String),
    Literal(Rgb),
}

impl ColorRef {
    pub fn theme(name: &str) -> Self {
        ColorRef::Theme(name.to_string())
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRef::Theme(name) => f.write_str(name),
            ColorRef::Literal(rgb) => write!(f, "#{}", rgb),
        }
    }
}

impl TryFrom<String> for ColorRef {
    type Error = String;
    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        if s.starts_with('#') {
            Ok(ColorRef::Literal(s.parse()?))
        } else if s.is_empty() {
            Err("empty color reference".to_string())
        } else {
            Ok(ColorRef::Theme(s))
        }
    }
}

impl From<ColorRef> for String {
    fn from(c: ColorRef) -> Self {
        c.to_string()
    }
}

impl From<Rgb> for ColorRef {
    fn from(rgb: Rgb) -> Self {
        ColorRef::Literal(rgb)
    }
}

pub const BACKGROUND: &str = "background";
pub const CARD_BACKGROUND: &str = "card_background";
pub const ACCENT: &str = "accent";
pub const ACCENT_SECONDARY: &str = "accent_secondary";
pub const TEXT_PRIMARY: &str = "text_primary";
pub const TEXT_SECONDARY: &str = "text_secondary";
pub const TEXT_MUTED: &str = "text_muted";
pub const CAUTION: &str = "caution";
pub const SUCCESS: &str = "success";
pub const DANGER: &str = "danger";
pub const HIGHLIGHT: &str = "highlight";

const STANDARD_PALETTE: [(&str, Rgb); 11] = [
    (BACKGROUND, Rgb::new(0x1E, 0x1E, 0x2E)),
    (CARD_BACKGROUND, Rgb::new(0x2A, 0x2A, 0x3C)),
    (ACCENT, Rgb::new(0x7C, 0x3A, 0xED)),
    (ACCENT_SECONDARY, Rgb::new(0x06, 0xB6, 0xD4)),
    (TEXT_PRIMARY, Rgb::new(0xFF, 0xFF, 0xFF)),
    (TEXT_SECONDARY, Rgb::new(0xCC, 0xCC, 0xDD)),
    (TEXT_MUTED, Rgb::new(0x99, 0x99, 0xAA)),
    (CAUTION, Rgb::new(0xF9, 0x73, 0x16)),
    (SUCCESS, Rgb::new(0x22, 0xC5, 0x5E)),
    (DANGER, Rgb::new(0xEF, 0x44, 0x44)),
    (HIGHLIGHT, Rgb::new(0xFA, 0xCC, 0x15)),
];

/// Immutable name -> color table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    colors: BTreeMap<String, Rgb>,
}

impl Theme {
    /// The dark palette the built-in deck is designed for.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_PALETTE.iter().map(|(n, c)| (n.to_string(), *c)))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, Rgb)>) -> Self {
        Self {
            colors: entries.into_iter().collect(),
        }
    }

    pub fn resolve(&self, name: &str) -> Result<Rgb> {
        self.colors
            .get(name)
            .copied()
            .ok_or_else(|| DeckError::UnknownThemeColor(name.to_string()))
    }

    pub fn color(&self, color: &ColorRef) -> Result<Rgb> {
        match color {
            ColorRef::Theme(name) => self.resolve(name),
            ColorRef::Literal(rgb) => Ok(*rgb),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.colors.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}
