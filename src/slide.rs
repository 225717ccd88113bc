//! Slides: a background plus drawable elements in paint order.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::shapes::{Rect, Shape};
use crate::text::TextFrame;
use crate::theme::Rgb;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Shape(Shape),
    Text(TextFrame),
}

impl Element {
    pub fn rect(&self) -> &Rect {
        match self {
            Element::Shape(shape) => &shape.rect,
            Element::Text(frame) => &frame.rect,
        }
    }
}

/// Elements later in the list are drawn on top of earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub background: Rgb,
    pub elements: Vec<Element>,
}

impl Slide {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            elements: vec![],
        }
    }

    pub fn push_shape(&mut self, shape: Shape) -> &mut Self {
        self.elements.push(Element::Shape(shape));
        self
    }

    pub fn push_text(&mut self, frame: TextFrame) -> &mut Self {
        self.elements.push(Element::Text(frame));
        self
    }

    pub fn push_card(&mut self, card: Card) -> &mut Self {
        self.elements.extend(card.into_elements());
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All text frames, in paint order.
    pub fn text_frames(&self) -> impl Iterator<Item = &TextFrame> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(frame) => Some(frame),
            Element::Shape(_) => None,
        })
    }
}
