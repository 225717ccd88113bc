//! Shape primitives.
//!
//! Constructors here only build values; placing a shape on a slide is a
//! separate step owned by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};
use crate::theme::Rgb;
use crate::units::Emu;

/// Stroke width used when a border is requested without one: 1.5pt.
pub const DEFAULT_BORDER_WIDTH: Emu = Emu(19_050);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Rect {
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Result<Self> {
        for (dim, what) in [(width, "width must not be negative"), (height, "height must not be negative")] {
            if dim.0 < 0 {
                return Err(DeckError::InvalidMeasurement {
                    value: dim.0 as f64,
                    reason: what,
                });
            }
        }
        for dim in [left, top, width, height] {
            if !dim.in_range() {
                return Err(DeckError::InvalidMeasurement {
                    value: dim.0 as f64,
                    reason: "out of range",
                });
            }
        }
        Ok(Self { left, top, width, height })
    }

    /// `[left, top, width, height]` in inches.
    pub fn from_inches(r: [f64; 4]) -> Result<Self> {
        Self::new(
            Emu::inches(r[0])?,
            Emu::inches(r[1])?,
            Emu::inches(r[2])?,
            Emu::inches(r[3])?,
        )
    }

    pub fn right(&self) -> Emu {
        self.left + self.width
    }

    pub fn bottom(&self) -> Emu {
        self.top + self.height
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when the interiors overlap; touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    RoundedRectangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    pub color: Rgb,
    pub width: Emu,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub rect: Rect,
    pub fill: Rgb,
    /// `None` means no stroke at all.
    pub border: Option<Border>,
}

impl Shape {
    /// Override the stroke width. No effect on a borderless shape.
    pub fn with_border_width(mut self, width: Emu) -> Self {
        if let Some(border) = self.border.as_mut() {
            border.width = width;
        }
        self
    }
}

pub fn make_rect(rect: Rect, fill: Rgb, border: Option<Rgb>) -> Shape {
    Shape {
        kind: ShapeKind::RoundedRectangle,
        rect,
        fill,
        border: border.map(|color| Border {
            color,
            width: DEFAULT_BORDER_WIDTH,
        }),
    }
}
