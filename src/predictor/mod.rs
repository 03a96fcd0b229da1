mod artifact;
mod error;
mod linear;

use std::fmt;

pub use artifact::{load_model, ModelArtifact};
pub use error::{ModelLoadError, PredictError};
pub use linear::{LinearClassifier, LinearRegression};

use crate::features::FeatureVector;

/// A single model output.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    /// A regression output.
    Value(f64),
    /// A classification output.
    Label(String),
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `Debug` keeps the decimal point on whole numbers: 42.0, not 42.
            Self::Value(v) => write!(f, "{v:?}"),
            Self::Label(l) => write!(f, "{l}"),
        }
    }
}

/// A loaded, read-only predictive model.
///
/// Implementations must not keep state between calls: the same feature vector
/// always yields the same prediction.
pub trait Predictor {
    /// Computes the prediction for one feature vector.
    ///
    /// # Errors
    /// Returns `PredictError` if the vector does not fit the model.
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError>;

    /// The number of features the model expects, when it declares one.
    fn num_features(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_values_render_with_a_decimal_point() {
        assert_eq!(Prediction::Value(42.0).to_string(), "42.0");
        assert_eq!(Prediction::Value(4.5).to_string(), "4.5");
        assert_eq!(Prediction::Value(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn labels_render_verbatim() {
        assert_eq!(Prediction::Label("high".into()).to_string(), "high");
    }
}
