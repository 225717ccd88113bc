//! Render Pipeline - Single Entry Point
//!
//! render MUST lint the finished scene. No bypass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::LayoutConfig;
use crate::deck::{Deck, SceneGraph};
use crate::error::{DeckError, Result};
use crate::hashing::{compute_job_hash, compute_scene_hash};
use crate::outline::Outline;
use crate::templates::TemplateLibrary;
use crate::theme::Theme;
use crate::units::Canvas;
use crate::validation::{FailureMode, ValidationResult, Validator};
use crate::ENGINE_VERSION;

/// What the document writer receives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDeck {
    pub id: String,
    pub name: String,
    pub version: String,
    pub engine_version: String,
    pub created_at: DateTime<Utc>,
    pub slide_count: usize,
    pub scene_hash: String,
    pub job_hash: String,
    pub validation: ValidationResult,
    pub scene: SceneGraph,
}

/// The render pipeline - single entry point for turning outlines into scenes
pub struct DeckPipeline {
    canvas: Canvas,
    theme: Theme,
    layout: LayoutConfig,
    validator: Validator,
}

impl DeckPipeline {
    pub fn new(theme: Theme, layout: LayoutConfig, failure_mode: FailureMode) -> Result<Self> {
        layout.validate()?;
        let canvas = layout.canvas()?;
        Ok(Self {
            canvas,
            theme,
            layout,
            validator: Validator::new(failure_mode),
        })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn templates(&self) -> TemplateLibrary<'_> {
        TemplateLibrary::new(&self.canvas, &self.theme, &self.layout)
    }

    /// Interpret every slide record, in order, into a finalized scene.
    pub fn build_scene(&self, outline: &Outline) -> Result<SceneGraph> {
        let lib = self.templates();
        let mut deck = Deck::new(self.canvas);

        for (index, spec) in outline.slides.iter().enumerate() {
            let slide = spec.build(&lib)?;
            debug!(index, template = ?spec.template, title = %spec.title, "slide built");
            deck.add_slide(slide)?;
        }

        deck.finalize()
    }

    /// Lint a scene with this pipeline's policy.
    pub fn validate_scene(&self, scene: &SceneGraph) -> ValidationResult {
        let result = self.validator.validate(scene);
        if self.validator.failure_mode() != FailureMode::Log {
            for v in &result.violations {
                warn!(rule = %v.rule, slide = v.slide, element = v.element, "{}", v.message);
            }
        }
        result
    }

    /// Render an outline.
    ///
    /// CRITICAL: This ALWAYS lints the scene. A blocked deck is never returned.
    pub fn render(&self, outline: &Outline) -> Result<RenderedDeck> {
        info!(name = %outline.name, slides = outline.slides.len(), "rendering outline");
        self.check_engine_version(outline)?;

        let scene = self.build_scene(outline)?;
        let validation = self.validate_scene(&scene);
        if !validation.valid {
            return Err(DeckError::ValidationFailed(validation.summary()));
        }

        let scene_hash = compute_scene_hash(&scene)?;
        let job_hash = compute_job_hash(&outline.name, &outline.version, outline, ENGINE_VERSION)?;

        info!(slides = scene.slide_count(), %scene_hash, "deck rendered");

        Ok(RenderedDeck {
            id: Uuid::new_v4().to_string(),
            name: outline.name.clone(),
            version: outline.version.clone(),
            engine_version: ENGINE_VERSION.to_string(),
            created_at: Utc::now(),
            slide_count: scene.slide_count(),
            scene_hash,
            job_hash,
            validation,
            scene,
        })
    }

    fn check_engine_version(&self, outline: &Outline) -> Result<()> {
        let engine_ver = semver::Version::parse(ENGINE_VERSION)
            .map_err(|_| DeckError::InvalidVersion(ENGINE_VERSION.to_string()))?;
        let min_ver = semver::Version::parse(&outline.engine_min_version)
            .map_err(|_| DeckError::InvalidVersion(outline.engine_min_version.clone()))?;

        if engine_ver < min_ver {
            return Err(DeckError::EngineVersionMismatch {
                required: outline.engine_min_version.clone(),
                current: ENGINE_VERSION.to_string(),
            });
        }

        Ok(())
    }
}

impl Default for DeckPipeline {
    fn default() -> Self {
        Self {
            canvas: Canvas::widescreen(),
            theme: Theme::standard(),
            layout: LayoutConfig::default(),
            validator: Validator::default(),
        }
    }
}
