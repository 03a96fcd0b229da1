use std::{error::Error, fmt};

use crate::predictor::{ModelLoadError, PredictError};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, FormError>;

/// All errors that can occur while setting up or running a prediction form.
#[derive(Debug)]
pub enum FormError {
    /// The field definitions or their defaults are unusable. Fatal at startup.
    Configuration(String),
    /// The model artifact could not be loaded. Fatal at startup.
    ModelLoad(ModelLoadError),
    /// A numeric field holds text that does not parse as a number.
    InputFormat { field: String, value: String },
    /// A categorical field holds a label that is not in its lookup table.
    Encoding { field: String, label: String },
    /// The loaded model rejected the feature vector.
    Prediction(PredictError),
}

impl FormError {
    /// Whether the error only affects a single prediction request.
    ///
    /// Recoverable errors are rendered in the output region and the user may
    /// correct the offending field and try again. The rest must keep the form
    /// from opening.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InputFormat { .. } | Self::Encoding { .. } | Self::Prediction(_)
        )
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::ModelLoad(e) => write!(f, "cannot load model: {e}"),
            Self::InputFormat { field, value } => {
                write!(f, "invalid number for field '{field}': '{value}'")
            }
            Self::Encoding { field, label } => {
                write!(f, "unknown category for field '{field}': '{label}'")
            }
            Self::Prediction(e) => write!(f, "prediction failed: {e}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ModelLoad(e) => Some(e),
            Self::Prediction(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelLoadError> for FormError {
    fn from(e: ModelLoadError) -> Self {
        Self::ModelLoad(e)
    }
}

impl From<PredictError> for FormError {
    fn from(e: PredictError) -> Self {
        Self::Prediction(e)
    }
}
