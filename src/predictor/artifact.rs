use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};
use serde::Deserialize;

use super::{LinearClassifier, LinearRegression, ModelLoadError, Predictor};

/// On-disk description of a trained model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LinearRegression {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    LinearClassifier {
        labels: Vec<String>,
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    },
}

impl ModelArtifact {
    /// Validates the artifact and builds the predictor it describes.
    ///
    /// # Errors
    /// Returns a human-readable reason if the artifact is inconsistent.
    pub fn build(self) -> Result<Box<dyn Predictor>, String> {
        match self {
            Self::LinearRegression {
                coefficients,
                intercept,
            } => {
                if coefficients.is_empty() {
                    return Err("coefficients must not be empty".into());
                }
                Ok(Box::new(LinearRegression::new(coefficients, intercept)))
            }
            Self::LinearClassifier {
                labels,
                coefficients,
                intercepts,
            } => {
                if labels.is_empty() {
                    return Err("labels must not be empty".into());
                }
                if coefficients.len() != labels.len() {
                    return Err(format!(
                        "expected {} coefficient rows (one per label), got {}",
                        labels.len(),
                        coefficients.len()
                    ));
                }
                if intercepts.len() != labels.len() {
                    return Err(format!(
                        "expected {} intercepts (one per label), got {}",
                        labels.len(),
                        intercepts.len()
                    ));
                }

                let width = coefficients[0].len();
                if width == 0 {
                    return Err("coefficient rows must not be empty".into());
                }
                if let Some(i) = coefficients.iter().position(|row| row.len() != width) {
                    return Err(format!(
                        "coefficient row {i} has {} values, expected {width}",
                        coefficients[i].len()
                    ));
                }

                let rows = labels.len();
                let flat = coefficients.into_iter().flatten().collect();
                let coefficients = Array2::from_shape_vec((rows, width), flat)
                    .map_err(|e| format!("bad coefficient matrix: {e}"))?;

                Ok(Box::new(LinearClassifier::new(
                    labels,
                    coefficients,
                    Array1::from_vec(intercepts),
                )))
            }
        }
    }
}

/// Loads a predictor from a model artifact on disk.
///
/// The file is read once, as raw bytes, and never touched again.
///
/// # Errors
/// Returns `ModelLoadError` if the file is missing, is not an artifact, or
/// describes an unusable model.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Box<dyn Predictor>, ModelLoadError> {
    let path = path.as_ref();
    let owned = || PathBuf::from(path);

    let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Io {
        path: owned(),
        source,
    })?;

    let artifact: ModelArtifact =
        serde_json::from_slice(&bytes).map_err(|source| ModelLoadError::Format {
            path: owned(),
            source,
        })?;

    let model = artifact
        .build()
        .map_err(|reason| ModelLoadError::Invalid {
            path: owned(),
            reason,
        })?;

    log::info!(
        "loaded model from {} ({} features)",
        path.display(),
        model
            .num_features()
            .map_or_else(|| "?".to_string(), |n| n.to_string())
    );

    Ok(model)
}
