use thiserror::Error;

/// Top-level error type for the panel layout calculators.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to serialize layout: {0}")]
    Serialization(String),
}

/// Errors raised while validating a layout configuration.
///
/// These are reported before any calculation begins.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must not be negative, got {value}")]
    Negative { parameter: &'static str, value: f64 },

    #[error("{parameter} must be a finite number, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("{parameter} must be at least {min}, got {value}")]
    BelowMinimum {
        parameter: &'static str,
        value: usize,
        min: usize,
    },

    #[error("malformed configuration: {0}")]
    Malformed(String),
}

/// Errors raised while validating raw panel records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("panel input must be a list of records")]
    NotAList,

    #[error("malformed panel input: {0}")]
    Malformed(String),

    #[error("panel record {index} is not an object")]
    NotAnObject { index: usize },

    #[error("panel record {index} is missing coordinate `{field}`")]
    MissingCoordinate { index: usize, field: &'static str },

    #[error("panel record {index} has a non-numeric coordinate `{field}`")]
    NonNumeric { index: usize, field: &'static str },
}

/// Convenience type alias for results using [`LayoutError`].
pub type Result<T> = std::result::Result<T, LayoutError>;
