//! DeckForge Core - Slide Layout Compiler
//!
//! # The Five Rules (Non-Negotiable)
//! 1. Geometry Is Absolute
//! 2. Colors Come From The Theme
//! 3. Templates Never Look Ahead
//! 4. Decks Only Grow
//! 5. Same Outline, Same Scene

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod hashing;
pub mod outline;
pub mod pipeline;
pub mod shapes;
pub mod slide;
pub mod templates;
pub mod text;
pub mod theme;
pub mod units;
pub mod validation;

pub use card::{make_card, Card, CardStyle};
pub use config::{CardLayout, LayoutConfig};
pub use deck::{Deck, SceneGraph};
pub use error::{DeckError, Result};
pub use hashing::{canonical_json, compute_job_hash, compute_scene_hash};
pub use outline::{ElementSpec, Outline, SlideSpec};
pub use pipeline::{DeckPipeline, RenderedDeck};
pub use shapes::{make_rect, Rect, Shape, ShapeKind};
pub use slide::{Element, Slide};
pub use templates::{TemplateKind, TemplateLibrary};
pub use text::{make_text_frame, Alignment, FontSize, Paragraph, TextFrame, TextStyle};
pub use theme::{ColorRef, Rgb, Theme};
pub use units::{from_canonical, to_canonical, Canvas, Emu, LengthUnit};
pub use validation::{FailureMode, LayoutViolation, ValidationResult, ViolationSeverity};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
/// Call once at startup; stdout stays free for scene output.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}
