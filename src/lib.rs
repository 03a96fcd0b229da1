pub mod catalog;
pub mod controller;
pub mod error;
pub mod features;
pub mod fields;
pub mod output;
pub mod phone;
pub mod predictor;

pub use catalog::ModelCatalog;
pub use controller::{FormController, FormPhase, PredictionResult};
pub use error::{FormError, Result};
pub use features::FeatureVector;
pub use fields::{CategoryEncoding, CategoryTable, FieldDef, FieldKind};
pub use output::{DisplaySurface, OutputRegion};
pub use predictor::{load_model, ModelLoadError, PredictError, Prediction, Predictor};
