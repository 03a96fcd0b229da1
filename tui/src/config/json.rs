use std::{io, path::PathBuf};

use model_tester::ModelCatalog;

use super::model::AppConfig;

/// Loads an [`AppConfig`] from a JSON file, falling back to the defaults when
/// the file does not exist.
///
/// # Errors
/// Returns a human-readable string if the file exists but cannot be read or
/// parsed.
pub fn load_or_default(path: &str) -> Result<AppConfig, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(&content).map_err(|e| format!("{path}: {e}")),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(format!("cannot read '{path}': {e}")),
    }
}

/// Parses an [`AppConfig`] from JSON text.
///
/// Every key is optional; missing ones keep their default.
///
/// # Errors
/// Returns a human-readable string if the JSON is malformed or inconsistent.
pub fn parse(content: &str) -> Result<AppConfig, String> {
    let val: serde_json::Value =
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

    let mut config = AppConfig::default();

    if let Some(models) = val.get("models") {
        let models = models.as_object().ok_or("models must be an object")?;

        let mut catalog = ModelCatalog::new();
        for (name, path) in models {
            let path = path
                .as_str()
                .ok_or_else(|| format!("models.{name} must be a path string"))?;
            catalog.register(name, path);
        }
        config.catalog = catalog;
    }

    if let Some(name) = val.get("regression") {
        config.regression = name
            .as_str()
            .ok_or("regression must be a model name")?
            .to_string();
    }

    config.classification = match val.get("classification") {
        None | Some(serde_json::Value::Null) => None,
        Some(name) => Some(
            name.as_str()
                .ok_or("classification must be a model name or null")?
                .to_string(),
        ),
    };

    if let Some(log_file) = val["log_file"].as_str() {
        config.log_file = PathBuf::from(log_file);
    }

    for name in std::iter::once(&config.regression).chain(&config.classification) {
        if config.catalog.path(name).is_none() {
            return Err(format!("model '{name}' is not listed in models"));
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(parse("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn full_config() {
        let config = parse(
            r#"{
                "models": { "linear": "models/price.json", "tiers": "models/tiers.json" },
                "regression": "linear",
                "classification": "tiers",
                "log_file": "/tmp/tester.log"
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.catalog.path("tiers"),
            Some(Path::new("models/tiers.json"))
        );
        assert_eq!(config.regression, "linear");
        assert_eq!(config.classification.as_deref(), Some("tiers"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/tester.log"));
    }

    #[test]
    fn rejects_selection_missing_from_models() {
        let err = parse(r#"{ "models": { "a": "a.json" }, "regression": "b" }"#).unwrap_err();
        assert!(err.contains("'b'"), "{err}");
    }

    #[test]
    fn rejects_non_string_paths() {
        assert!(parse(r#"{ "models": { "linear": 3 } }"#).is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = load_or_default("surely-not-a-config-file.json").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
