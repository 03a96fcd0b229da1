use ndarray::{Array1, Array2};

use super::{PredictError, Prediction, Predictor};
use crate::features::FeatureVector;

/// An ordinary linear regressor: `w · x + b`.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegression {
    /// Creates a new `LinearRegression`.
    ///
    /// # Arguments
    /// * `coefficients` - One weight per feature, in feature order.
    /// * `intercept` - The bias term.
    ///
    /// # Returns
    /// A new `LinearRegression` instance.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients: Array1::from_vec(coefficients),
            intercept,
        }
    }
}

impl Predictor for LinearRegression {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        check_len(features, self.coefficients.len())?;
        Ok(Prediction::Value(
            self.coefficients.dot(&features.view()) + self.intercept,
        ))
    }

    fn num_features(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }
}

/// A one-vs-rest linear classifier.
///
/// Every label owns a row of weights and an intercept; the label with the
/// highest score wins, the first one on ties.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    labels: Vec<String>,
    coefficients: Array2<f64>,
    intercepts: Array1<f64>,
}

impl LinearClassifier {
    /// Creates a new `LinearClassifier`.
    ///
    /// `coefficients` must have one row per label and `intercepts` one entry per
    /// label; the artifact loader checks this before building one.
    pub fn new(labels: Vec<String>, coefficients: Array2<f64>, intercepts: Array1<f64>) -> Self {
        Self {
            labels,
            coefficients,
            intercepts,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Predictor for LinearClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        check_len(features, self.coefficients.ncols())?;

        let scores = self.coefficients.dot(&features.view()) + &self.intercepts;
        let best = scores
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &s)| match best {
                Some((_, b)) if b >= s => best,
                _ => Some((i, s)),
            })
            .map(|(i, _)| i)
            .ok_or_else(|| PredictError::Failed("classifier has no labels".into()))?;

        Ok(Prediction::Label(self.labels[best].clone()))
    }

    fn num_features(&self) -> Option<usize> {
        Some(self.coefficients.ncols())
    }
}

fn check_len(features: &FeatureVector, expected: usize) -> Result<(), PredictError> {
    if features.len() != expected {
        return Err(PredictError::ShapeMismatch {
            got: features.len(),
            expected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn regression_is_dot_plus_intercept() {
        let model = LinearRegression::new(vec![1.0, 2.0, -1.0], 0.5);
        let x = FeatureVector::from(vec![3.0, 1.0, 2.0]);

        assert_eq!(model.predict(&x).unwrap(), Prediction::Value(3.5));
    }

    #[test]
    fn regression_rejects_wrong_width() {
        let model = LinearRegression::new(vec![1.0, 2.0], 0.0);
        let x = FeatureVector::from(vec![1.0]);

        assert_eq!(
            model.predict(&x),
            Err(PredictError::ShapeMismatch { got: 1, expected: 2 })
        );
    }

    #[test]
    fn classifier_picks_highest_score() {
        let model = LinearClassifier::new(
            vec!["low".into(), "mid".into(), "high".into()],
            array![[-1.0, 0.0], [0.0, 0.0], [1.0, 0.0]],
            array![0.0, 0.5, 0.0],
        );

        let cheap = FeatureVector::from(vec![-2.0, 7.0]);
        let pricey = FeatureVector::from(vec![2.0, 7.0]);
        let middle = FeatureVector::from(vec![0.0, 7.0]);

        assert_eq!(model.predict(&cheap).unwrap(), Prediction::Label("low".into()));
        assert_eq!(model.predict(&pricey).unwrap(), Prediction::Label("high".into()));
        assert_eq!(model.predict(&middle).unwrap(), Prediction::Label("mid".into()));
    }

    #[test]
    fn classifier_breaks_ties_on_first_label() {
        let model = LinearClassifier::new(
            vec!["a".into(), "b".into()],
            array![[1.0], [1.0]],
            array![0.0, 0.0],
        );

        let x = FeatureVector::from(vec![1.0]);
        assert_eq!(model.predict(&x).unwrap(), Prediction::Label("a".into()));
    }
}
