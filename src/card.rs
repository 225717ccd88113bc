//! Card Composer - Background + Title + Body
//!
//! A card always expands to exactly three elements, background first so the
//! text is drawn on top of it.

use serde::{Deserialize, Serialize};

use crate::config::CardLayout;
use crate::error::{DeckError, Result};
use crate::shapes::{make_rect, Rect, Shape};
use crate::slide::Element;
use crate::text::{bullet_list, text_box, FontSize, TextFrame, TextStyle};
use crate::theme::{Rgb, Theme};
use crate::units::Emu;

/// Insets and styling for cards, with every color already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    pub padding_x: Emu,
    pub title_top: Emu,
    pub title_height: Emu,
    pub body_top: Emu,
    pub padding_bottom: Emu,
    pub fill: Rgb,
    pub border: Option<Rgb>,
    pub border_width: Emu,
    pub title_color: Rgb,
    pub body_color: Rgb,
    pub title_size: FontSize,
    pub body_size: FontSize,
    pub body_spacing: Emu,
}

impl CardStyle {
    pub fn from_layout(layout: &CardLayout, theme: &Theme) -> Result<Self> {
        Ok(Self {
            padding_x: Emu::inches(layout.padding_x)?,
            title_top: Emu::inches(layout.title_top)?,
            title_height: Emu::inches(layout.title_height)?,
            body_top: Emu::inches(layout.body_top)?,
            padding_bottom: Emu::inches(layout.padding_bottom)?,
            fill: theme.color(&layout.fill)?,
            border: layout.border.as_ref().map(|b| theme.color(b)).transpose()?,
            border_width: Emu::points(layout.border_width)?,
            title_color: theme.color(&layout.title_color)?,
            body_color: theme.color(&layout.body_color)?,
            title_size: FontSize::checked_pt(layout.title_size)?,
            body_size: FontSize::checked_pt(layout.body_size)?,
            body_spacing: Emu::points(layout.body_spacing)?,
        })
    }

    pub fn title_color(mut self, color: Rgb) -> Self {
        self.title_color = color;
        self
    }

    pub fn body_color(mut self, color: Rgb) -> Self {
        self.body_color = color;
        self
    }

    pub fn title_size(mut self, size: FontSize) -> Self {
        self.title_size = size;
        self
    }

    pub fn body_size(mut self, size: FontSize) -> Self {
        self.body_size = size;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub background: Shape,
    pub title: TextFrame,
    pub body: TextFrame,
}

impl Card {
    /// `[background, title, body]`, in drawing order.
    pub fn into_elements(self) -> [Element; 3] {
        [
            Element::Shape(self.background),
            Element::Text(self.title),
            Element::Text(self.body),
        ]
    }
}

pub fn make_card<S: AsRef<str>>(
    rect: Rect,
    title: &str,
    body_items: &[S],
    style: &CardStyle,
) -> Result<Card> {
    let insets = [
        ("paddingX", style.padding_x),
        ("titleTop", style.title_top),
        ("titleHeight", style.title_height),
        ("bodyTop", style.body_top),
        ("paddingBottom", style.padding_bottom),
    ];
    for (name, inset) in insets {
        if inset < Emu::ZERO || !inset.in_range() {
            return Err(DeckError::InvalidCardGeometry {
                title: title.to_string(),
                reason: format!("{} inset {} EMU is out of range", name, inset.get()),
            });
        }
    }
    let title_end = style.title_top + style.title_height;
    if title_end > style.body_top {
        return Err(DeckError::InvalidCardGeometry {
            title: title.to_string(),
            reason: format!(
                "title band ends at {} EMU, past the body top at {} EMU",
                title_end.get(),
                style.body_top.get()
            ),
        });
    }

    let inner_width = rect.width - style.padding_x - style.padding_x;
    if inner_width <= Emu::ZERO {
        return Err(DeckError::InvalidCardGeometry {
            title: title.to_string(),
            reason: format!("inner width {} EMU is not positive", inner_width.get()),
        });
    }
    let body_height = rect.height - style.body_top - style.padding_bottom;
    if body_height <= Emu::ZERO {
        return Err(DeckError::InvalidCardGeometry {
            title: title.to_string(),
            reason: format!("body height {} EMU is not positive", body_height.get()),
        });
    }

    let left = rect.left + style.padding_x;
    let title_rect = Rect::new(left, rect.top + style.title_top, inner_width, style.title_height)?;
    let body_rect = Rect::new(left, rect.top + style.body_top, inner_width, body_height)?;

    let background = make_rect(rect, style.fill, style.border).with_border_width(style.border_width);
    let title_style = TextStyle::new(style.title_size, style.title_color).bold(true);
    let body_style = TextStyle::new(style.body_size, style.body_color).spacing_after(style.body_spacing);

    Ok(Card {
        background,
        title: text_box(title_rect, title, &title_style),
        body: bullet_list(body_rect, body_items, &body_style),
    })
}
