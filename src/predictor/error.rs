use std::{error::Error, fmt, io, path::PathBuf};

/// Failures while turning an artifact on disk into a predictor.
#[derive(Debug)]
pub enum ModelLoadError {
    /// The artifact could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The artifact is not a valid model document.
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifact parsed but describes an unusable model.
    Invalid { path: PathBuf, reason: String },
    /// The catalog has no model registered under this name.
    UnknownModel(String),
}

impl fmt::Display for ModelLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read '{}': {source}", path.display()),
            Self::Format { path, source } => {
                write!(f, "'{}' is not a model artifact: {source}", path.display())
            }
            Self::Invalid { path, reason } => {
                write!(f, "'{}' describes an invalid model: {reason}", path.display())
            }
            Self::UnknownModel(name) => write!(f, "no model registered as '{name}'"),
        }
    }
}

impl Error for ModelLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Format { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Failures raised by a predictor for a given feature vector.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The feature vector has the wrong length.
    ShapeMismatch { got: usize, expected: usize },
    /// Any other model-specific failure.
    Failed(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { got, expected } => {
                write!(f, "expected {expected} features, got {got}")
            }
            Self::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for PredictError {}
