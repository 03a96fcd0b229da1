pub mod json;
pub mod model;

pub use model::AppConfig;

pub const DEFAULT_CONFIG_PATH: &str = "model-tester.json";
