//! Error types for deck construction.

use thiserror::Error;

/// Every failure the engine can raise.
///
/// All variants are deterministic validation failures: the same input always
/// fails the same way, so none of them is worth retrying.
#[derive(Error, Debug)]
pub enum DeckError {
    /// Negative or non-finite geometry input.
    #[error("Invalid measurement {value}: {reason}")]
    InvalidMeasurement { value: f64, reason: &'static str },

    /// Symbolic color that is not registered in the theme.
    #[error("Unknown theme color: {0}")]
    UnknownThemeColor(String),

    /// A card whose derived title or body region would be empty.
    #[error("Invalid card geometry for '{title}': {reason}")]
    InvalidCardGeometry { title: String, reason: String },

    /// Mutation attempted after the deck was handed off.
    #[error("Deck has already been finalized")]
    DeckAlreadyFinalized,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Outline requires engine >= {required}, current is {current}")]
    EngineVersionMismatch { required: String, current: String },

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_theme_color() {
        let err = DeckError::UnknownThemeColor("nonexistent".to_string());
        assert_eq!(err.to_string(), "Unknown theme color: nonexistent");
    }

    #[test]
    fn test_error_display_invalid_measurement() {
        let err = DeckError::InvalidMeasurement {
            value: -1.5,
            reason: "must not be negative",
        };
        let msg = err.to_string();
        assert!(msg.contains("-1.5"));
        assert!(msg.contains("negative"));
    }

    #[test]
    fn test_error_display_card_geometry() {
        let err = DeckError::InvalidCardGeometry {
            title: "Tiny".to_string(),
            reason: "body height is not positive".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Tiny"));
        assert!(msg.contains("body height"));
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DeckError = json_err.into();
        assert!(matches!(err, DeckError::Serialization(_)));
    }
}
