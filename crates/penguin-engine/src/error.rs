use thiserror::Error;

/// Errors raised while building engine state from configuration data.
///
/// Runtime animation calls never fail; only loading and validating
/// JSON configs and manifests does.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tween '{id}' has negative duration {duration}")]
    NegativeDuration { id: String, duration: f32 },

    #[error("'{id}' has negative speed {speed}")]
    NegativeSpeed { id: String, speed: f32 },

    #[error("'{id}' has non-finite {field} {value}")]
    NotFinite {
        id: String,
        field: &'static str,
        value: f32,
    },

    #[error("no tween named '{0}' in manifest")]
    UnknownTween(String),

    #[error("no sequence named '{0}' in manifest")]
    UnknownSequence(String),

    #[error("descriptor with empty id")]
    EmptyId,
}
