//! Layout configuration.
//!
//! Every inset, band height, position and default font size the templates
//! use lives here. Lengths are inches, font sizes are whole points.

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};
use crate::text::MAX_FONT_POINTS;
use crate::theme::{self, ColorRef, Rgb};
use crate::units::{Canvas, Emu};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub text: TextDefaults,
    #[serde(default)]
    pub title: TitleLayout,
    #[serde(default)]
    pub section: SectionLayout,
    #[serde(default)]
    pub content: ContentLayout,
    #[serde(default)]
    pub card: CardLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_width")]
    pub width: f64,
    #[serde(default = "default_canvas_height")]
    pub height: f64,
}

fn default_canvas_width() -> f64 { 13.333 }
fn default_canvas_height() -> f64 { 7.5 }

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Defaults for free-standing text boxes and bullet lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDefaults {
    #[serde(default = "default_text_size")]
    pub text_size: u32,
    #[serde(default = "default_text_color")]
    pub text_color: ColorRef,
    #[serde(default = "default_bullet_size")]
    pub bullet_size: u32,
    #[serde(default = "default_bullet_color")]
    pub bullet_color: ColorRef,
    /// Points.
    #[serde(default = "default_bullet_spacing")]
    pub bullet_spacing: f64,
}

fn default_text_size() -> u32 { 18 }
fn default_text_color() -> ColorRef { ColorRef::theme(theme::TEXT_PRIMARY) }
fn default_bullet_size() -> u32 { 16 }
fn default_bullet_color() -> ColorRef { ColorRef::theme(theme::TEXT_SECONDARY) }
fn default_bullet_spacing() -> f64 { 6.0 }

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            text_size: default_text_size(),
            text_color: default_text_color(),
            bullet_size: default_bullet_size(),
            bullet_color: default_bullet_color(),
            bullet_spacing: default_bullet_spacing(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleLayout {
    #[serde(default = "default_title_rect")]
    pub title_rect: [f64; 4],
    #[serde(default = "default_title_size")]
    pub title_size: u32,
    #[serde(default = "default_title_subtitle_rect")]
    pub subtitle_rect: [f64; 4],
    #[serde(default = "default_title_subtitle_size")]
    pub subtitle_size: u32,
}

fn default_title_rect() -> [f64; 4] { [1.0, 2.2, 11.0, 1.5] }
fn default_title_size() -> u32 { 44 }
fn default_title_subtitle_rect() -> [f64; 4] { [1.0, 3.8, 11.0, 1.0] }
fn default_title_subtitle_size() -> u32 { 22 }

impl Default for TitleLayout {
    fn default() -> Self {
        Self {
            title_rect: default_title_rect(),
            title_size: default_title_size(),
            subtitle_rect: default_title_subtitle_rect(),
            subtitle_size: default_title_subtitle_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLayout {
    #[serde(default = "default_bar_rect")]
    pub bar_rect: [f64; 4],
    #[serde(default = "default_bar_color")]
    pub bar_color: ColorRef,
    #[serde(default = "default_section_title_rect")]
    pub title_rect: [f64; 4],
    #[serde(default = "default_section_title_size")]
    pub title_size: u32,
    #[serde(default = "default_section_subtitle_rect")]
    pub subtitle_rect: [f64; 4],
    #[serde(default = "default_section_subtitle_size")]
    pub subtitle_size: u32,
}

fn default_bar_rect() -> [f64; 4] { [1.0, 3.05, 3.0, 0.08] }
fn default_bar_color() -> ColorRef { ColorRef::theme(theme::ACCENT) }
fn default_section_title_rect() -> [f64; 4] { [1.0, 1.8, 11.0, 1.2] }
fn default_section_title_size() -> u32 { 40 }
fn default_section_subtitle_rect() -> [f64; 4] { [1.0, 3.4, 11.0, 1.0] }
fn default_section_subtitle_size() -> u32 { 20 }

impl Default for SectionLayout {
    fn default() -> Self {
        Self {
            bar_rect: default_bar_rect(),
            bar_color: default_bar_color(),
            title_rect: default_section_title_rect(),
            title_size: default_section_title_size(),
            subtitle_rect: default_section_subtitle_rect(),
            subtitle_size: default_section_subtitle_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentLayout {
    #[serde(default = "default_header_height")]
    pub header_height: f64,
    #[serde(default = "default_header_fill")]
    pub header_fill: ColorRef,
    #[serde(default = "default_content_title_rect")]
    pub title_rect: [f64; 4],
    #[serde(default = "default_content_title_size")]
    pub title_size: u32,
}

fn default_header_height() -> f64 { 1.1 }
fn default_header_fill() -> ColorRef { ColorRef::Literal(Rgb::new(0x25, 0x25, 0x38)) }
fn default_content_title_rect() -> [f64; 4] { [0.8, 0.2, 11.0, 0.7] }
fn default_content_title_size() -> u32 { 30 }

impl Default for ContentLayout {
    fn default() -> Self {
        Self {
            header_height: default_header_height(),
            header_fill: default_header_fill(),
            title_rect: default_content_title_rect(),
            title_size: default_content_title_size(),
        }
    }
}

/// Card insets are measured from the card's own edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLayout {
    #[serde(default = "default_padding_x")]
    pub padding_x: f64,
    #[serde(default = "default_title_top")]
    pub title_top: f64,
    #[serde(default = "default_title_height")]
    pub title_height: f64,
    #[serde(default = "default_body_top")]
    pub body_top: f64,
    #[serde(default = "default_padding_bottom")]
    pub padding_bottom: f64,
    #[serde(default = "default_card_fill")]
    pub fill: ColorRef,
    #[serde(default = "default_card_border")]
    pub border: Option<ColorRef>,
    /// Points.
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_card_title_color")]
    pub title_color: ColorRef,
    #[serde(default = "default_card_body_color")]
    pub body_color: ColorRef,
    #[serde(default = "default_card_title_size")]
    pub title_size: u32,
    #[serde(default = "default_card_body_size")]
    pub body_size: u32,
    /// Points.
    #[serde(default = "default_body_spacing")]
    pub body_spacing: f64,
}

fn default_padding_x() -> f64 { 0.2 }
fn default_title_top() -> f64 { 0.15 }
fn default_title_height() -> f64 { 0.45 }
fn default_body_top() -> f64 { 0.6 }
fn default_padding_bottom() -> f64 { 0.2 }
fn default_card_fill() -> ColorRef { ColorRef::theme(theme::CARD_BACKGROUND) }
fn default_card_border() -> Option<ColorRef> { Some(ColorRef::Literal(Rgb::new(0x44, 0x44, 0x55))) }
fn default_border_width() -> f64 { 1.5 }
fn default_card_title_color() -> ColorRef { ColorRef::theme(theme::ACCENT_SECONDARY) }
fn default_card_body_color() -> ColorRef { ColorRef::theme(theme::TEXT_SECONDARY) }
fn default_card_title_size() -> u32 { 20 }
fn default_card_body_size() -> u32 { 14 }
fn default_body_spacing() -> f64 { 6.0 }

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            padding_x: default_padding_x(),
            title_top: default_title_top(),
            title_height: default_title_height(),
            body_top: default_body_top(),
            padding_bottom: default_padding_bottom(),
            fill: default_card_fill(),
            border: default_card_border(),
            border_width: default_border_width(),
            title_color: default_card_title_color(),
            body_color: default_card_body_color(),
            title_size: default_card_title_size(),
            body_size: default_card_body_size(),
            body_spacing: default_body_spacing(),
        }
    }
}

impl CardLayout {
    /// Tighter insets for dense grids.
    pub fn compact() -> Self {
        Self {
            padding_x: 0.12,
            title_top: 0.08,
            title_height: 0.4,
            body_top: 0.48,
            padding_bottom: 0.12,
            title_size: 16,
            body_size: 12,
            ..Self::default()
        }
    }
}

impl LayoutConfig {
    pub fn with_card(mut self, card: CardLayout) -> Self {
        self.card = card;
        self
    }

    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = CanvasConfig { width, height };
        self
    }

    pub fn with_text(mut self, text: TextDefaults) -> Self {
        self.text = text;
        self
    }

    pub fn canvas(&self) -> Result<Canvas> {
        Canvas::from_inches(self.canvas.width, self.canvas.height)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
            ("text.bulletSpacing", self.text.bullet_spacing),
            ("content.headerHeight", self.content.header_height),
            ("card.paddingX", self.card.padding_x),
            ("card.titleTop", self.card.title_top),
            ("card.titleHeight", self.card.title_height),
            ("card.bodyTop", self.card.body_top),
            ("card.paddingBottom", self.card.padding_bottom),
            ("card.borderWidth", self.card.border_width),
        ];
        for (name, value) in lengths {
            check_length(name, value)?;
        }

        let rects = [
            ("title.titleRect", self.title.title_rect),
            ("title.subtitleRect", self.title.subtitle_rect),
            ("section.barRect", self.section.bar_rect),
            ("section.titleRect", self.section.title_rect),
            ("section.subtitleRect", self.section.subtitle_rect),
            ("content.titleRect", self.content.title_rect),
        ];
        for (name, rect) in rects {
            for value in rect {
                check_length(name, value)?;
            }
        }

        let sizes = [
            ("text.textSize", self.text.text_size),
            ("text.bulletSize", self.text.bullet_size),
            ("title.titleSize", self.title.title_size),
            ("title.subtitleSize", self.title.subtitle_size),
            ("section.titleSize", self.section.title_size),
            ("section.subtitleSize", self.section.subtitle_size),
            ("content.titleSize", self.content.title_size),
            ("card.titleSize", self.card.title_size),
            ("card.bodySize", self.card.body_size),
        ];
        for (name, size) in sizes {
            if size == 0 || size > MAX_FONT_POINTS {
                return Err(DeckError::InvalidConfig(format!(
                    "{} must be between 1 and {} points, got {}",
                    name, MAX_FONT_POINTS, size
                )));
            }
        }

        let title_end = Emu::inches(self.card.title_top)? + Emu::inches(self.card.title_height)?;
        if title_end > Emu::inches(self.card.body_top)? {
            return Err(DeckError::InvalidConfig(
                "card title band must end at or above card.bodyTop".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_length(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 || Emu::inches(value).is_err() {
        return Err(DeckError::InvalidConfig(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert!(LayoutConfig::default().with_card(CardLayout::compact()).validate().is_ok());
    }

    #[test]
    fn test_overlapping_card_bands_rejected() {
        let card = CardLayout {
            title_height: 0.5,
            ..CardLayout::default()
        };
        let err = LayoutConfig::default().with_card(card).validate().unwrap_err();
        assert!(err.to_string().contains("bodyTop"));
    }

    #[test]
    fn test_negative_length_rejected() {
        let config = LayoutConfig::default().with_canvas(-1.0, 7.5);
        assert!(matches!(config.validate(), Err(DeckError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_font_size_rejected() {
        let mut config = LayoutConfig::default();
        config.card.body_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_font_size_rejected() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"content": {"titleSize": 50000000}}"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("content.titleSize"));
    }

    #[test]
    fn test_huge_length_rejected() {
        let mut config = LayoutConfig::default();
        config.card.padding_x = 1.0e13;
        assert!(matches!(config.validate(), Err(DeckError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{"card": {"paddingX": 0.3}}"#).unwrap();
        assert_eq!(config.card.padding_x, 0.3);
        assert_eq!(config.card.body_top, 0.6);
        assert_eq!(config.title, TitleLayout::default());
        assert_eq!(config.card.fill, ColorRef::theme("card_background"));
    }

    #[test]
    fn test_default_canvas_is_widescreen() {
        assert_eq!(LayoutConfig::default().canvas().unwrap(), Canvas::widescreen());
    }
}
