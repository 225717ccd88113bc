//! Text flow: ordered paragraphs inside a rectangular frame.
//!
//! Line breaking belongs to the document writer. The engine only records the
//! region, the paragraph order and their attributes, and whether to wrap.

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};
use crate::shapes::Rect;
use crate::theme::Rgb;
use crate::units::{Emu, EMU_PER_POINT};

/// Largest font size accepted from outlines and layouts.
pub const MAX_FONT_POINTS: u32 = 4_000;

/// Font size in hundredths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontSize(pub u32);

impl FontSize {
    /// Saturates; use [`FontSize::checked_pt`] for untrusted sizes.
    pub const fn pt(points: u32) -> Self {
        FontSize(points.saturating_mul(100))
    }

    /// Whole points in `1..=MAX_FONT_POINTS`.
    pub fn checked_pt(points: u32) -> Result<Self> {
        if points == 0 || points > MAX_FONT_POINTS {
            return Err(DeckError::InvalidMeasurement {
                value: points as f64,
                reason: "font size must be between 1 and 4000 points",
            });
        }
        Ok(Self::pt(points))
    }

    pub fn points(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn to_emu(self) -> Emu {
        Emu(self.0 as i64 * EMU_PER_POINT / 100)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub text: String,
    pub font_size: FontSize,
    pub color: Rgb,
    pub bold: bool,
    pub alignment: Alignment,
    /// Gap before the next paragraph.
    pub spacing_after: Emu,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFrame {
    pub rect: Rect,
    pub paragraphs: Vec<Paragraph>,
    pub wrap: bool,
}

impl TextFrame {
    pub fn is_blank(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Shared attributes for a run of paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font_size: FontSize,
    pub color: Rgb,
    pub bold: bool,
    pub alignment: Alignment,
    pub spacing_after: Emu,
}

impl TextStyle {
    pub fn new(font_size: FontSize, color: Rgb) -> Self {
        Self {
            font_size,
            color,
            bold: false,
            alignment: Alignment::Left,
            spacing_after: Emu::ZERO,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn spacing_after(mut self, spacing: Emu) -> Self {
        self.spacing_after = spacing;
        self
    }

    pub fn paragraph(&self, text: impl Into<String>) -> Paragraph {
        Paragraph {
            text: text.into(),
            font_size: self.font_size,
            color: self.color,
            bold: self.bold,
            alignment: self.alignment,
            spacing_after: self.spacing_after,
        }
    }
}

/// Paragraph order is kept as given. Spacing after the last paragraph is
/// dropped since there is nothing below it to separate.
pub fn make_text_frame(rect: Rect, mut paragraphs: Vec<Paragraph>, wrap: bool) -> TextFrame {
    if let Some(last) = paragraphs.last_mut() {
        last.spacing_after = Emu::ZERO;
    }
    TextFrame { rect, paragraphs, wrap }
}

/// Single-paragraph frame.
pub fn text_box(rect: Rect, text: &str, style: &TextStyle) -> TextFrame {
    make_text_frame(rect, vec![style.paragraph(text)], true)
}

/// One paragraph per item.
pub fn bullet_list<S: AsRef<str>>(rect: Rect, items: &[S], style: &TextStyle) -> TextFrame {
    let paragraphs = items.iter().map(|item| style.paragraph(item.as_ref())).collect();
    make_text_frame(rect, paragraphs, true)
}
