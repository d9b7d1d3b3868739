//! Error handling for heatanno

use thiserror::Error;

/// Main error type for annotation construction and rendering
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnotationError {
    #[error("Shape error in track '{track}': {message}")]
    Shape { track: String, message: String },

    #[error("Shape mismatch in track '{track}': {values} values for {positions} positions")]
    ShapeMismatch {
        track: String,
        values: usize,
        positions: usize,
    },

    #[error("Invalid order for track '{track}': index {index} out of range for {len} items")]
    InvalidOrder {
        track: String,
        index: usize,
        len: usize,
    },

    #[error("Invalid colors for track '{track}': {message}")]
    InvalidColors { track: String, message: String },

    #[error("Duplicate track name: {name}")]
    DuplicateTrack { name: String },

    #[error("Invalid annotation orientation: {0} (expected 'column' or 'row')")]
    InvalidWhich(String),

    #[error("Invalid axis: {0} (expected 'x' or 'y')")]
    InvalidAxis(String),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AnnotationError {
    pub fn shape<S: Into<String>, M: Into<String>>(track: S, message: M) -> Self {
        Self::Shape {
            track: track.into(),
            message: message.into(),
        }
    }

    pub fn shape_mismatch<S: Into<String>>(track: S, values: usize, positions: usize) -> Self {
        Self::ShapeMismatch {
            track: track.into(),
            values,
            positions,
        }
    }

    pub fn invalid_order<S: Into<String>>(track: S, index: usize, len: usize) -> Self {
        Self::InvalidOrder {
            track: track.into(),
            index,
            len,
        }
    }

    pub fn invalid_colors<S: Into<String>, M: Into<String>>(track: S, message: M) -> Self {
        Self::InvalidColors {
            track: track.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_track<S: Into<String>>(name: S) -> Self {
        Self::DuplicateTrack { name: name.into() }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Name of the track the error refers to, if any
    pub fn track(&self) -> Option<&str> {
        match self {
            Self::Shape { track, .. }
            | Self::ShapeMismatch { track, .. }
            | Self::InvalidOrder { track, .. }
            | Self::InvalidColors { track, .. } => Some(track),
            Self::DuplicateTrack { name } => Some(name),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for AnnotationError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for AnnotationError {
    fn from(err: toml::ser::Error) -> Self {
        Self::config(format!("TOML serialization error: {}", err))
    }
}

impl From<serde_json::Error> for AnnotationError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("JSON error: {}", err))
    }
}

/// Result type for annotation operations
pub type AnnotationResult<T> = Result<T, AnnotationError>;
