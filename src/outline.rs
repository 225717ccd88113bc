//! Outlines - slide content as data.
//!
//! An outline is an ordered list of slide records. Each record names a
//! template and lists the elements to place on top of it; rects are
//! `[left, top, width, height]` in inches.

use serde::{Deserialize, Serialize};

use crate::card::make_card;
use crate::error::Result;
use crate::shapes::{make_rect, Rect};
use crate::slide::Slide;
use crate::templates::{TemplateKind, TemplateLibrary};
use crate::text::{bullet_list, text_box, Alignment, FontSize, TextStyle};
use crate::theme::ColorRef;
use crate::units::Emu;

const BUILTIN_OUTLINE: &str = include_str!("../outlines/ai_basics.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    pub name: String,
    pub version: String,
    pub engine_min_version: String,
    pub slides: Vec<SlideSpec>,
}

impl Outline {
    /// The deck shipped with the engine.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_OUTLINE)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideSpec {
    pub template: TemplateKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ElementSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementSpec {
    Text(TextSpec),
    Bullets(BulletsSpec),
    Card(CardSpec),
    Rect(RectSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpec {
    pub rect: [f64; 4],
    pub text: String,
    #[serde(default)]
    pub font_size: Option<u32>,
    #[serde(default)]
    pub color: Option<ColorRef>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub align: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletsSpec {
    pub rect: [f64; 4],
    pub items: Vec<String>,
    #[serde(default)]
    pub font_size: Option<u32>,
    #[serde(default)]
    pub color: Option<ColorRef>,
    /// Points.
    #[serde(default)]
    pub spacing_after: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSpec {
    pub rect: [f64; 4],
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub title_color: Option<ColorRef>,
    #[serde(default)]
    pub body_color: Option<ColorRef>,
    #[serde(default)]
    pub title_size: Option<u32>,
    #[serde(default)]
    pub body_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectSpec {
    pub rect: [f64; 4],
    pub fill: ColorRef,
    #[serde(default)]
    pub border: Option<ColorRef>,
}

impl SlideSpec {
    /// Build the template, then place every element in order. Any invalid
    /// element fails the whole slide.
    pub fn build(&self, lib: &TemplateLibrary<'_>) -> Result<Slide> {
        let mut slide = lib.build(self.template, &self.title, self.subtitle.as_deref())?;
        for element in &self.elements {
            element.place(lib, &mut slide)?;
        }
        Ok(slide)
    }
}

impl ElementSpec {
    pub fn rect(&self) -> [f64; 4] {
        match self {
            ElementSpec::Text(s) => s.rect,
            ElementSpec::Bullets(s) => s.rect,
            ElementSpec::Card(s) => s.rect,
            ElementSpec::Rect(s) => s.rect,
        }
    }

    fn place(&self, lib: &TemplateLibrary<'_>, slide: &mut Slide) -> Result<()> {
        let theme = lib.theme();
        let defaults = &lib.layout().text;
        let rect = Rect::from_inches(self.rect())?;

        match self {
            ElementSpec::Text(spec) => {
                let color = theme.color(spec.color.as_ref().unwrap_or(&defaults.text_color))?;
                let size = FontSize::checked_pt(spec.font_size.unwrap_or(defaults.text_size))?;
                let style = TextStyle::new(size, color).bold(spec.bold).align(spec.align);
                slide.push_text(text_box(rect, &spec.text, &style));
            }
            ElementSpec::Bullets(spec) => {
                let color = theme.color(spec.color.as_ref().unwrap_or(&defaults.bullet_color))?;
                let size = FontSize::checked_pt(spec.font_size.unwrap_or(defaults.bullet_size))?;
                let spacing = Emu::points(spec.spacing_after.unwrap_or(defaults.bullet_spacing))?;
                let style = TextStyle::new(size, color).spacing_after(spacing);
                slide.push_text(bullet_list(rect, &spec.items, &style));
            }
            ElementSpec::Card(spec) => {
                let mut style = lib.card_style()?;
                if let Some(color) = &spec.title_color {
                    style = style.title_color(theme.color(color)?);
                }
                if let Some(color) = &spec.body_color {
                    style = style.body_color(theme.color(color)?);
                }
                if let Some(size) = spec.title_size {
                    style = style.title_size(FontSize::checked_pt(size)?);
                }
                if let Some(size) = spec.body_size {
                    style = style.body_size(FontSize::checked_pt(size)?);
                }
                slide.push_card(make_card(rect, &spec.title, &spec.items, &style)?);
            }
            ElementSpec::Rect(spec) => {
                let fill = theme.color(&spec.fill)?;
                let border = spec.border.as_ref().map(|b| theme.color(b)).transpose()?;
                slide.push_shape(make_rect(rect, fill, border));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::error::DeckError;
    use crate::slide::Element;
    use crate::theme::{Rgb, Theme};
    use crate::units::Canvas;

    fn with_lib<T>(f: impl FnOnce(&TemplateLibrary<'_>) -> T) -> T {
        let canvas = Canvas::widescreen();
        let theme = Theme::standard();
        let layout = LayoutConfig::default();
        f(&TemplateLibrary::new(&canvas, &theme, &layout))
    }

    #[test]
    fn test_builtin_outline_parses() {
        let outline = Outline::builtin().unwrap();
        assert_eq!(outline.slides.len(), 32);
        assert_eq!(outline.slides[0].template, TemplateKind::Title);
        assert_eq!(outline.slides[1].title, "Agenda");
        assert_eq!(outline.slides[31].title, "Thank You");
    }

    #[test]
    fn test_element_kinds_parse() {
        let json = r##"{
            "template": "content",
            "title": "Mixed",
            "elements": [
                {"kind": "text", "rect": [1, 1, 4, 1], "text": "hello", "align": "center", "bold": true},
                {"kind": "bullets", "rect": [1, 2, 4, 2], "items": ["a", "b"], "spacingAfter": 10},
                {"kind": "card", "rect": [6, 2, 4, 3], "title": "Card", "items": ["x"], "titleColor": "success"},
                {"kind": "rect", "rect": [0, 7, 13, 0.5], "fill": "#101010", "border": "accent"}
            ]
        }"##;
        let spec: SlideSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.elements.len(), 4);

        let slide = with_lib(|lib| spec.build(lib)).unwrap();
        // header bar + title, text, bullets, 3 card elements, rect
        assert_eq!(slide.len(), 8);
        match &slide.elements[7] {
            Element::Shape(shape) => {
                assert_eq!(shape.fill, Rgb::new(0x10, 0x10, 0x10));
                assert!(shape.border.is_some());
            }
            Element::Text(_) => panic!("expected rect last"),
        }
    }

    #[test]
    fn test_text_defaults_apply() {
        let spec: SlideSpec = serde_json::from_str(
            r#"{"template": "title", "title": "T", "elements": [{"kind": "text", "rect": [1, 5, 11, 0.6], "text": "by"}]}"#,
        )
        .unwrap();
        let slide = with_lib(|lib| spec.build(lib)).unwrap();
        let frame = slide.text_frames().last().unwrap();
        assert_eq!(frame.paragraphs[0].font_size, FontSize::pt(18));
        assert_eq!(frame.paragraphs[0].color, Rgb::new(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_invalid_element_fails_slide() {
        let spec: SlideSpec = serde_json::from_str(
            r#"{"template": "content", "title": "Bad", "elements": [{"kind": "card", "rect": [1, 1, 3, 0.5], "title": "tiny"}]}"#,
        )
        .unwrap();
        let err = with_lib(|lib| spec.build(lib)).unwrap_err();
        assert!(matches!(err, DeckError::InvalidCardGeometry { .. }));
    }

    #[test]
    fn test_unknown_color_fails_slide() {
        let spec: SlideSpec = serde_json::from_str(
            r#"{"template": "section", "title": "S", "elements": [{"kind": "text", "rect": [1, 1, 3, 1], "text": "x", "color": "mauve"}]}"#,
        )
        .unwrap();
        let err = with_lib(|lib| spec.build(lib)).unwrap_err();
        assert!(matches!(err, DeckError::UnknownThemeColor(ref n) if n == "mauve"));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        assert!(matches!(Outline::from_json("{"), Err(DeckError::Serialization(_))));
    }
}
