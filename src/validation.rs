//! Layout Lint - Rule/Policy Separation
//!
//! Rules produce structured violations.
//! Policy maps violations to actions.

use serde::{Deserialize, Serialize};

use crate::deck::SceneGraph;
use crate::slide::Element;
use crate::text::TextFrame;
use crate::units::Canvas;

/// Average glyph advance as a fraction of the font size.
const AVG_GLYPH_WIDTH_EM: f64 = 0.5;
const LINE_HEIGHT_EM: f64 = 1.2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Reject the deck when any error is found.
    Block,
    #[default]
    Warn,
    Log,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub slide: usize,
    pub element: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<LayoutViolation>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == ViolationSeverity::Error)
    }

    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("slide {} element {}: {}: {}", v.slide, v.element, v.rule, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A check run against every element of every slide.
pub trait LayoutRule {
    fn name(&self) -> &'static str;
    fn check(&self, element: &Element, canvas: &Canvas) -> Option<(ViolationSeverity, String)>;
}

// --- Concrete Rules ---

pub struct CanvasBoundsRule;

impl LayoutRule for CanvasBoundsRule {
    fn name(&self) -> &'static str { "canvas_bounds" }

    fn check(&self, element: &Element, canvas: &Canvas) -> Option<(ViolationSeverity, String)> {
        let rect = element.rect();
        if canvas.contains(rect) {
            return None;
        }
        Some((
            ViolationSeverity::Error,
            format!(
                "element spans to ({}, {}) EMU, canvas is {}x{}",
                rect.right().get(),
                rect.bottom().get(),
                canvas.width.get(),
                canvas.height.get()
            ),
        ))
    }
}

pub struct TextOverflowRule;

impl TextOverflowRule {
    /// Rough rendered height; the writer does the real line breaking.
    pub fn estimated_height(frame: &TextFrame) -> f64 {
        let width = frame.rect.width.get() as f64;
        frame
            .paragraphs
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let em = p.font_size.to_emu().get() as f64;
                let text_width = p.text.chars().count() as f64 * em * AVG_GLYPH_WIDTH_EM;
                let lines = if frame.wrap && width > 0.0 {
                    (text_width / width).ceil().max(1.0)
                } else {
                    1.0
                };
                let spacing = if i + 1 < frame.paragraphs.len() {
                    p.spacing_after.get() as f64
                } else {
                    0.0
                };
                lines * em * LINE_HEIGHT_EM + spacing
            })
            .sum()
    }
}

impl LayoutRule for TextOverflowRule {
    fn name(&self) -> &'static str { "text_overflow" }

    fn check(&self, element: &Element, _canvas: &Canvas) -> Option<(ViolationSeverity, String)> {
        let Element::Text(frame) = element else {
            return None;
        };
        let needed = Self::estimated_height(frame);
        let available = frame.rect.height.get() as f64;
        if needed <= available {
            return None;
        }
        Some((
            ViolationSeverity::Warning,
            format!(
                "text needs about {:.0} EMU, frame is {:.0} EMU tall",
                needed, available
            ),
        ))
    }
}

/// Validator orchestrates rules and applies policy
pub struct Validator {
    rules: Vec<Box<dyn LayoutRule>>,
    failure_mode: FailureMode,
}

impl Validator {
    pub fn new(failure_mode: FailureMode) -> Self {
        Self {
            rules: vec![Box::new(CanvasBoundsRule), Box::new(TextOverflowRule)],
            failure_mode,
        }
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }

    pub fn validate(&self, scene: &SceneGraph) -> ValidationResult {
        let mut violations = vec![];

        for (slide_index, slide) in scene.slides.iter().enumerate() {
            for (element_index, element) in slide.elements.iter().enumerate() {
                for rule in &self.rules {
                    if let Some((severity, message)) = rule.check(element, &scene.canvas) {
                        violations.push(LayoutViolation {
                            rule: rule.name().to_string(),
                            severity,
                            slide: slide_index,
                            element: element_index,
                            message,
                        });
                    }
                }
            }
        }

        // Apply failure mode policy
        let has_errors = violations.iter().any(|v| v.severity == ViolationSeverity::Error);
        let valid = match self.failure_mode {
            FailureMode::Block => !has_errors,
            FailureMode::Warn | FailureMode::Log => true,
        };

        ValidationResult { valid, violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(FailureMode::default())
    }
}
