use thiserror::Error;

/// Errors detected while setting up sliders, intervals and family configs.
///
/// These are raised before any rendering happens and are not recoverable at
/// runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("slider `{name}`: minimum {min} exceeds maximum {max}")]
    InvertedBounds { name: String, min: f64, max: f64 },

    #[error("slider `{name}`: initial value {value} outside [{min}, {max}]")]
    ValueOutOfBounds {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("slider `{name}`: step must be positive, got {step}")]
    NonPositiveStep { name: String, step: f64 },

    #[error("slider `{name}`: value, bounds and step must be finite")]
    NonFiniteSlider { name: String },

    #[error("duplicate slider `{0}`")]
    DuplicateSlider(String),

    #[error("interval [{low}, {high}] is empty or not finite")]
    EmptyInterval { low: f64, high: f64 },

    #[error("sample grid needs at least two points, got {0}")]
    TooFewPoints(usize),

    #[error("{family} requires a slider named `{name}`")]
    MissingParameter { family: String, name: String },

    #[error("{family} has no parameter named `{name}`")]
    UnknownParameter { family: String, name: String },

    #[error("unknown distribution family `{0}`")]
    UnknownFamily(String),
}

/// Errors raised while constructing a distribution for a render.
///
/// A failed construction terminates the current render only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistError {
    #[error("invalid {family} parameters: {reason}")]
    InvalidParameters { family: &'static str, reason: String },

    #[error("{family}: no value for parameter `{name}`")]
    MissingValue { family: &'static str, name: String },
}
