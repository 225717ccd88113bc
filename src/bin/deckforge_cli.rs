//! DeckForge CLI - Scene graph producer
//!
//! Commands: themes, validate, render
//! Outputs JSON to stdout, logs to stderr
//! Returns non-zero on validation failure

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use deckforge_core::{
    validation::FailureMode, DeckError, DeckPipeline, LayoutConfig, Outline, Theme,
};

#[derive(Parser)]
#[command(name = "deckforge-cli")]
#[command(about = "DeckForge CLI - Slide Layout Compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON layout overrides (LayoutConfig)
    #[arg(short, long, global = true)]
    layout: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List theme colors
    Themes,

    /// Lint an outline without emitting the scene
    Validate {
        /// JSON outline; the built-in deck when omitted
        #[arg(short, long)]
        payload: Option<String>,
    },

    /// Render an outline to a scene graph
    Render {
        /// JSON outline; the built-in deck when omitted
        #[arg(short, long)]
        payload: Option<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Refuse to render when any element leaves the canvas
        #[arg(long)]
        strict: bool,
    },
}

fn load_outline(payload: Option<&str>) -> Result<Outline, DeckError> {
    match payload {
        Some(json) => Outline::from_json(json),
        None => Outline::builtin(),
    }
}

fn load_layout(layout: Option<&str>) -> Result<LayoutConfig, DeckError> {
    match layout {
        Some(json) => Ok(serde_json::from_str(json)?),
        None => Ok(LayoutConfig::default()),
    }
}

/// Returns false when the value could not be serialized.
fn print_json(value: &serde_json::Value, pretty: bool) -> bool {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(text) => {
            println!("{}", text);
            true
        }
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            false
        }
    }
}

fn error_json(e: &DeckError) -> serde_json::Value {
    serde_json::json!({
        "success": false,
        "error": e.to_string(),
    })
}

fn main() -> ExitCode {
    deckforge_core::init_logging();
    let cli = Cli::parse();

    let layout = match load_layout(cli.layout.as_deref()) {
        Ok(l) => l,
        Err(e) => {
            print_json(&error_json(&e), false);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Themes => {
            let theme = Theme::standard();
            let colors: Vec<_> = theme
                .iter()
                .map(|(name, rgb)| serde_json::json!({ "name": name, "rgb": rgb }))
                .collect();
            if print_json(&serde_json::Value::Array(colors), true) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }

        Commands::Validate { payload } => {
            let pipeline = match DeckPipeline::new(Theme::standard(), layout, FailureMode::Block) {
                Ok(p) => p,
                Err(e) => {
                    print_json(&error_json(&e), false);
                    return ExitCode::FAILURE;
                }
            };
            let scene = load_outline(payload.as_deref()).and_then(|o| pipeline.build_scene(&o));
            match scene {
                Ok(scene) => {
                    let result = pipeline.validate_scene(&scene);
                    let code = if result.valid {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(2) // Validation failure
                    };
                    match serde_json::to_value(&result) {
                        Ok(value) if print_json(&value, true) => code,
                        Ok(_) => ExitCode::FAILURE,
                        Err(e) => {
                            eprintln!("Failed to serialize output: {}", e);
                            ExitCode::FAILURE
                        }
                    }
                }
                Err(e) => {
                    print_json(&error_json(&e), false);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Render { payload, pretty, strict } => {
            let mode = if strict { FailureMode::Block } else { FailureMode::Warn };
            let rendered = DeckPipeline::new(Theme::standard(), layout, mode).and_then(|pipeline| {
                let outline = load_outline(payload.as_deref())?;
                pipeline.render(&outline)
            });

            match rendered {
                Ok(deck) => {
                    let slide_count = deck.slide_count;
                    let output = serde_json::json!({
                        "success": true,
                        "deck": deck,
                    });
                    if !print_json(&output, pretty) {
                        return ExitCode::FAILURE;
                    }
                    eprintln!("Deck rendered: {} slides", slide_count);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    print_json(&error_json(&e), false);
                    ExitCode::from(2) // Render failure
                }
            }
        }
    }
}
