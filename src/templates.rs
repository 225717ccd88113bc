//! Template System - Slide Skeletons
//!
//! Each template fills the background and its fixed header region, then
//! hands the slide back. Templates never see what the caller adds next.

use serde::{Deserialize, Serialize};

use crate::card::{make_card, Card, CardStyle};
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::shapes::{make_rect, Rect};
use crate::slide::Slide;
use crate::text::{text_box, Alignment, FontSize, TextStyle};
use crate::theme::{self, Rgb, Theme};
use crate::units::{Canvas, Emu};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Title,
    Section,
    Content,
}

/// Template constructors bound to one canvas, theme and layout.
#[derive(Debug, Clone, Copy)]
pub struct TemplateLibrary<'a> {
    canvas: &'a Canvas,
    theme: &'a Theme,
    layout: &'a LayoutConfig,
}

impl<'a> TemplateLibrary<'a> {
    pub fn new(canvas: &'a Canvas, theme: &'a Theme, layout: &'a LayoutConfig) -> Self {
        Self { canvas, theme, layout }
    }

    pub fn canvas(&self) -> &'a Canvas {
        self.canvas
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn layout(&self) -> &'a LayoutConfig {
        self.layout
    }

    pub fn build(&self, kind: TemplateKind, title: &str, subtitle: Option<&str>) -> Result<Slide> {
        match kind {
            TemplateKind::Title => self.title(title, subtitle),
            TemplateKind::Section => self.section(title, subtitle),
            TemplateKind::Content => self.content(title),
        }
    }

    /// Centered title at mid-height, optional centered subtitle below.
    pub fn title(&self, title: &str, subtitle: Option<&str>) -> Result<Slide> {
        let cfg = &self.layout.title;
        let mut slide = self.blank()?;

        let style = self.heading(cfg.title_size)?.align(Alignment::Center);
        slide.push_text(text_box(Rect::from_inches(cfg.title_rect)?, title, &style));

        if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
            let style = self.muted(cfg.subtitle_size)?.align(Alignment::Center);
            slide.push_text(text_box(Rect::from_inches(cfg.subtitle_rect)?, subtitle, &style));
        }
        Ok(slide)
    }

    /// Accent separator bar, left-aligned title, optional muted subtitle.
    pub fn section(&self, title: &str, subtitle: Option<&str>) -> Result<Slide> {
        let cfg = &self.layout.section;
        let mut slide = self.blank()?;

        let bar_fill = self.theme.color(&cfg.bar_color)?;
        slide.push_shape(make_rect(Rect::from_inches(cfg.bar_rect)?, bar_fill, None));

        let style = self.heading(cfg.title_size)?;
        slide.push_text(text_box(Rect::from_inches(cfg.title_rect)?, title, &style));

        if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
            let style = self.muted(cfg.subtitle_size)?;
            slide.push_text(text_box(Rect::from_inches(cfg.subtitle_rect)?, subtitle, &style));
        }
        Ok(slide)
    }

    /// Full-width header bar with the title inside it.
    pub fn content(&self, title: &str) -> Result<Slide> {
        let cfg = &self.layout.content;
        let mut slide = self.blank()?;

        let header = Rect::new(Emu::ZERO, Emu::ZERO, self.canvas.width, Emu::inches(cfg.header_height)?)?;
        slide.push_shape(make_rect(header, self.theme.color(&cfg.header_fill)?, None));

        let style = self.heading(cfg.title_size)?;
        slide.push_text(text_box(Rect::from_inches(cfg.title_rect)?, title, &style));
        Ok(slide)
    }

    /// Card style from the layout defaults, colors resolved.
    pub fn card_style(&self) -> Result<CardStyle> {
        CardStyle::from_layout(&self.layout.card, self.theme)
    }

    pub fn card<S: AsRef<str>>(&self, rect: Rect, title: &str, body_items: &[S]) -> Result<Card> {
        make_card(rect, title, body_items, &self.card_style()?)
    }

    fn blank(&self) -> Result<Slide> {
        Ok(Slide::new(self.theme.resolve(theme::BACKGROUND)?))
    }

    fn heading(&self, size: u32) -> Result<TextStyle> {
        Ok(self.style(size, theme::TEXT_PRIMARY)?.bold(true))
    }

    fn muted(&self, size: u32) -> Result<TextStyle> {
        self.style(size, theme::TEXT_MUTED)
    }

    fn style(&self, size: u32, color: &str) -> Result<TextStyle> {
        let color: Rgb = self.theme.resolve(color)?;
        Ok(TextStyle::new(FontSize::checked_pt(size)?, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeckError;
    use crate::slide::Element;

    fn fixtures() -> (Canvas, Theme, LayoutConfig) {
        (Canvas::widescreen(), Theme::standard(), LayoutConfig::default())
    }

    fn text_of(element: &Element) -> &str {
        match element {
            Element::Text(frame) => &frame.paragraphs[0].text,
            Element::Shape(_) => panic!("expected text frame"),
        }
    }

    #[test]
    fn test_title_template() {
        let (canvas, theme, layout) = fixtures();
        let lib = TemplateLibrary::new(&canvas, &theme, &layout);
        let slide = lib.title("Thank You", Some("Questions?")).unwrap();

        assert_eq!(slide.background, theme.resolve("background").unwrap());
        assert_eq!(slide.len(), 2);
        assert_eq!(text_of(&slide.elements[0]), "Thank You");
        assert_eq!(text_of(&slide.elements[1]), "Questions?");
        assert_eq!(*slide.elements[0].rect(), Rect::from_inches([1.0, 2.2, 11.0, 1.5]).unwrap());
        assert_eq!(*slide.elements[1].rect(), Rect::from_inches([1.0, 3.8, 11.0, 1.0]).unwrap());
    }

    #[test]
    fn test_title_without_subtitle() {
        let (canvas, theme, layout) = fixtures();
        let lib = TemplateLibrary::new(&canvas, &theme, &layout);
        assert_eq!(lib.title("Solo", None).unwrap().len(), 1);
        assert_eq!(lib.title("Solo", Some("")).unwrap().len(), 1);
    }

    #[test]
    fn test_section_template() {
        let (canvas, theme, layout) = fixtures();
        let lib = TemplateLibrary::new(&canvas, &theme, &layout);
        let slide = lib.section("1. AI Basics", Some("AI -> ML -> LLMs")).unwrap();

        assert_eq!(slide.len(), 3);
        match &slide.elements[0] {
            Element::Shape(bar) => {
                assert_eq!(bar.fill, theme.resolve("accent").unwrap());
                assert_eq!(bar.rect, Rect::from_inches([1.0, 3.05, 3.0, 0.08]).unwrap());
                assert!(bar.border.is_none());
            }
            Element::Text(_) => panic!("accent bar must come first"),
        }
        match &slide.elements[1] {
            Element::Text(frame) => {
                assert_eq!(frame.paragraphs[0].alignment, Alignment::Left);
                assert!(frame.paragraphs[0].bold);
            }
            Element::Shape(_) => panic!("expected title"),
        }
        match &slide.elements[2] {
            Element::Text(frame) => {
                assert_eq!(frame.paragraphs[0].color, theme.resolve("text_muted").unwrap());
            }
            Element::Shape(_) => panic!("expected subtitle"),
        }
    }

    #[test]
    fn test_content_header_spans_canvas() {
        let (canvas, theme, layout) = fixtures();
        let lib = TemplateLibrary::new(&canvas, &theme, &layout);
        let slide = lib.content("Agenda").unwrap();

        assert_eq!(slide.len(), 2);
        match &slide.elements[0] {
            Element::Shape(header) => {
                assert_eq!(header.rect.width, canvas.width);
                assert_eq!(header.rect.height, Emu::inches(1.1).unwrap());
                assert_eq!(header.fill, Rgb::new(0x25, 0x25, 0x38));
            }
            Element::Text(_) => panic!("header bar must come first"),
        }
        assert_eq!(text_of(&slide.elements[1]), "Agenda");
    }

    #[test]
    fn test_templates_fail_on_missing_theme_color() {
        let canvas = Canvas::widescreen();
        let theme = Theme::from_entries(vec![]);
        let layout = LayoutConfig::default();
        let lib = TemplateLibrary::new(&canvas, &theme, &layout);
        assert!(matches!(lib.content("x"), Err(DeckError::UnknownThemeColor(_))));
    }

    #[test]
    fn test_card_on_content_slide() {
        let (canvas, theme, layout) = fixtures();
        let lib = TemplateLibrary::new(&canvas, &theme, &layout);
        let mut slide = lib.content("Model Types").unwrap();
        let card = lib
            .card(Rect::from_inches([0.5, 1.4, 5.8, 2.4]).unwrap(), "By Architecture", &["MoE"])
            .unwrap();
        slide.push_card(card);

        assert_eq!(slide.len(), 5);
        match &slide.elements[2] {
            Element::Shape(bg) => assert_eq!(bg.fill, theme.resolve("card_background").unwrap()),
            Element::Text(_) => panic!("card background must precede its text"),
        }
    }

    #[test]
    fn test_build_dispatches_by_kind() {
        let (canvas, theme, layout) = fixtures();
        let lib = TemplateLibrary::new(&canvas, &theme, &layout);
        assert_eq!(lib.build(TemplateKind::Content, "x", Some("ignored")).unwrap(), lib.content("x").unwrap());
        assert_eq!(lib.build(TemplateKind::Section, "x", None).unwrap(), lib.section("x", None).unwrap());
    }
}
