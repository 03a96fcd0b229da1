use std::path::PathBuf;

use model_tester::{catalog::DEFAULT_MODEL_NAME, ModelCatalog};

pub const DEFAULT_LOG_FILE: &str = "model-tester.log";

/// Application settings parsed from model-tester.json.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog: ModelCatalog,
    /// Catalog name of the model behind the Regression tab.
    pub regression: String,
    /// Catalog name of the model behind the Classification tab, if any.
    pub classification: Option<String>,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: ModelCatalog::default(),
            regression: DEFAULT_MODEL_NAME.to_string(),
            classification: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
