//! Deck Assembler - append-only slide sequence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DeckError, Result};
use crate::slide::Slide;
use crate::units::Canvas;

/// The finished, ordered scene handed to the document writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub canvas: Canvas,
    pub slides: Vec<Slide>,
}

impl SceneGraph {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Slides are appended in presentation order and never reordered.
#[derive(Debug)]
pub struct Deck {
    canvas: Canvas,
    slides: Vec<Slide>,
    finalized: bool,
}

impl Deck {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            slides: vec![],
            finalized: false,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Append a slide, returning its zero-based position.
    pub fn add_slide(&mut self, slide: Slide) -> Result<usize> {
        if self.finalized {
            return Err(DeckError::DeckAlreadyFinalized);
        }
        let index = self.slides.len();
        debug!(index, elements = slide.len(), "slide appended");
        self.slides.push(slide);
        Ok(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Hand the slides off. Works once; the deck rejects all mutation after.
    pub fn finalize(&mut self) -> Result<SceneGraph> {
        if self.finalized {
            return Err(DeckError::DeckAlreadyFinalized);
        }
        self.finalized = true;
        Ok(SceneGraph {
            canvas: self.canvas,
            slides: std::mem::take(&mut self.slides),
        })
    }
}
