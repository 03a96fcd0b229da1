use std::collections::HashSet;

use crate::{
    error::{FormError, Result},
    features::{self, FeatureVector},
    fields::{CategoryEncoding, FieldDef, FieldKind},
    output::{DisplaySurface, OutputRegion, Unlocked},
    predictor::{Prediction, Predictor},
};

const RESULT_PREFIX: &str = "The prediction for these values is: ";

/// Lifecycle of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Waiting for input; fields are editable.
    Idle,
    /// Inside [`FormController::run_prediction`].
    Predicting,
}

/// The outcome of a successful prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub prediction: Prediction,
    pub rendered: String,
}

impl PredictionResult {
    fn new(prediction: Prediction) -> Self {
        let rendered = format!("{RESULT_PREFIX}{prediction}");
        Self {
            prediction,
            rendered,
        }
    }
}

/// Mediates between the editable fields of a form and a loaded model.
///
/// Field definitions are fixed at construction. Field values are owned by the
/// controller and only change through [`Self::set_value`], [`Self::value_mut`]
/// and [`Self::reset`].
pub struct FormController<D: DisplaySurface = OutputRegion> {
    fields: Vec<FieldDef>,
    values: Vec<String>,
    model: Box<dyn Predictor>,
    display: D,
    phase: FormPhase,
}

impl FormController<OutputRegion> {
    /// Binds `fields` and `model` to a fresh output region.
    ///
    /// # Errors
    /// Returns `FormError::Configuration` if the fields or their defaults are
    /// unusable with this model.
    pub fn initialize(fields: Vec<FieldDef>, model: Box<dyn Predictor>) -> Result<Self> {
        Self::with_display(fields, model, OutputRegion::new())
    }
}

impl<D: DisplaySurface> FormController<D> {
    /// Binds `fields` and `model` to the given display surface.
    ///
    /// Every field starts at its default value and the surface is made
    /// read-only.
    ///
    /// # Errors
    /// Returns `FormError::Configuration` if the fields or their defaults are
    /// unusable with this model.
    pub fn with_display(
        fields: Vec<FieldDef>,
        model: Box<dyn Predictor>,
        mut display: D,
    ) -> Result<Self> {
        validate(&fields, &*model)?;

        for field in &fields {
            if let FieldKind::Categorical {
                encoding: CategoryEncoding::Constant(c),
                ..
            } = field.kind
            {
                log::warn!(
                    "field '{}' encodes every category as {c}; its real encoding is undefined",
                    field.name
                );
            }
        }

        display.set_editable(false);
        let values = fields.iter().map(|f| f.default.clone()).collect();
        log::info!("form initialized with {} fields", fields.len());

        Ok(Self {
            fields,
            values,
            model,
            display,
            phase: FormPhase::Idle,
        })
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the current value of the field called `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.index_of(name).map(|i| self.values[i].as_str())
    }

    /// Returns the current value of the field at `index`.
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Mutable access to the value at `index`, for in-place text editing.
    pub fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        self.values.get_mut(index)
    }

    /// Sets the value of the field called `name`.
    ///
    /// Values are not validated here; bad input surfaces on the next
    /// prediction.
    ///
    /// # Errors
    /// Returns `FormError::Configuration` if the form has no such field.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let i = self
            .index_of(name)
            .ok_or_else(|| FormError::Configuration(format!("no field named '{name}'")))?;
        self.values[i] = value.into();
        Ok(())
    }

    /// Restores every field to its default value.
    pub fn reset(&mut self) {
        for (value, field) in self.values.iter_mut().zip(&self.fields) {
            value.clone_from(&field.default);
        }
    }

    /// Encodes the current field values, in field order.
    ///
    /// # Errors
    /// Returns the first `FormError::InputFormat` or `FormError::Encoding`
    /// found, in field order.
    pub fn assemble_features(&self) -> Result<FeatureVector> {
        features::assemble(&self.fields, self.values.iter().map(String::as_str))
    }

    /// Runs the model on the current field values and shows the outcome.
    ///
    /// The output region ends up holding either the rendered prediction or the
    /// error message, never both and never a previous result. Field values and
    /// the model are left untouched.
    ///
    /// # Errors
    /// Returns the error that was shown, so the caller can log or inspect it.
    /// All of them are recoverable.
    pub fn run_prediction(&mut self) -> Result<PredictionResult> {
        self.phase = FormPhase::Predicting;

        let outcome = self.predict_current();
        let text = match &outcome {
            Ok(result) => result.rendered.clone(),
            Err(e) => {
                log::warn!("prediction failed: {e}");
                e.to_string()
            }
        };
        Unlocked::enter(&mut self.display).replace_all(&text);

        self.phase = FormPhase::Idle;
        outcome
    }

    fn predict_current(&self) -> Result<PredictionResult> {
        let features = self.assemble_features()?;
        log::debug!("features: {:?}", features.to_vec());

        let prediction = self.model.predict(&features)?;
        log::info!("prediction: {prediction}");

        Ok(PredictionResult::new(prediction))
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

fn validate(fields: &[FieldDef], model: &dyn Predictor) -> Result<()> {
    let invalid = |msg: String| Err(FormError::Configuration(msg));

    if fields.is_empty() {
        return invalid("form must have at least one field".into());
    }

    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return invalid(format!("duplicate field name '{}'", field.name));
        }

        match &field.kind {
            FieldKind::Numeric => {
                if field.default.trim().parse::<f64>().is_err() {
                    return invalid(format!(
                        "default '{}' of field '{}' is not a number",
                        field.default, field.name
                    ));
                }
            }
            FieldKind::Categorical { table, .. } => {
                if table.is_empty() {
                    return invalid(format!("field '{}' has no categories", field.name));
                }
                if !table.contains(&field.default) {
                    return invalid(format!(
                        "default '{}' of field '{}' is not one of its categories",
                        field.default, field.name
                    ));
                }
            }
        }
    }

    match model.num_features() {
        Some(n) if n != fields.len() => invalid(format!(
            "model expects {n} features but the form has {} fields",
            fields.len()
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fields::CategoryTable, predictor::PredictError};

    struct Sum;

    impl Predictor for Sum {
        fn predict(&self, features: &FeatureVector) -> std::result::Result<Prediction, PredictError> {
            Ok(Prediction::Value(features.view().sum()))
        }
    }

    struct Fixed(usize);

    impl Predictor for Fixed {
        fn predict(&self, _: &FeatureVector) -> std::result::Result<Prediction, PredictError> {
            Ok(Prediction::Value(0.0))
        }

        fn num_features(&self) -> Option<usize> {
            Some(self.0)
        }
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::categorical("os", "OS", CategoryTable::new(["a", "b"]), "b"),
            FieldDef::numeric("ram", "RAM", "3"),
        ]
    }

    #[test]
    fn initialize_sets_defaults() {
        let form = FormController::initialize(fields(), Box::new(Sum)).unwrap();

        assert_eq!(form.value("os"), Some("b"));
        assert_eq!(form.value("ram"), Some("3"));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.display().content(), "");
    }

    #[test]
    fn initialize_rejects_default_outside_table() {
        let mut f = fields();
        f[0].default = "z".into();

        let err = FormController::initialize(f, Box::new(Sum)).err().unwrap();
        assert!(matches!(err, FormError::Configuration(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn initialize_rejects_duplicate_names() {
        let mut f = fields();
        f.push(FieldDef::numeric("ram", "RAM again", "1"));

        assert!(FormController::initialize(f, Box::new(Sum)).is_err());
    }

    #[test]
    fn initialize_rejects_unparseable_numeric_default() {
        let mut f = fields();
        f[1].default = "three".into();

        assert!(FormController::initialize(f, Box::new(Sum)).is_err());
    }

    #[test]
    fn initialize_rejects_model_width_mismatch() {
        assert!(FormController::initialize(fields(), Box::new(Fixed(3))).is_err());
        assert!(FormController::initialize(fields(), Box::new(Fixed(2))).is_ok());
    }

    #[test]
    fn set_value_rejects_unknown_field() {
        let mut form = FormController::initialize(fields(), Box::new(Sum)).unwrap();
        assert!(form.set_value("cpu", "8").is_err());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = FormController::initialize(fields(), Box::new(Sum)).unwrap();
        form.set_value("ram", "16").unwrap();
        form.value_mut(0).unwrap().replace_range(.., "a");

        form.reset();
        assert_eq!(form.value_at(0), Some("b"));
        assert_eq!(form.value_at(1), Some("3"));
    }

    #[test]
    fn run_prediction_renders_and_relocks() {
        let mut form = FormController::initialize(fields(), Box::new(Sum)).unwrap();

        let result = form.run_prediction().unwrap();
        assert_eq!(result.prediction, Prediction::Value(4.0));
        assert_eq!(
            form.display().content(),
            "The prediction for these values is: 4.0"
        );
        assert!(!form.display().is_editable());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn unknown_category_is_shown_not_defaulted() {
        let mut form = FormController::initialize(fields(), Box::new(Sum)).unwrap();
        form.set_value("os", "c").unwrap();

        let err = form.run_prediction().unwrap_err();
        assert!(matches!(err, FormError::Encoding { .. }));
        assert!(err.is_recoverable());
        assert_eq!(form.display().content(), err.to_string());
        assert_eq!(form.value("os"), Some("c"));
    }
}
