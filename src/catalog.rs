use std::path::{Path, PathBuf};

use crate::predictor::{load_model, ModelLoadError, Predictor};

pub const DEFAULT_MODEL_NAME: &str = "linear";
pub const DEFAULT_MODEL_PATH: &str = "phone_model.json";

/// Named model artifacts available to the form, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    entries: Vec<(String, PathBuf)>,
}

impl ModelCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `path` under `name`, replacing any previous entry for it.
    pub fn register<P: Into<PathBuf>>(&mut self, name: &str, path: P) {
        let path = path.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, p)) => *p = path,
            None => self.entries.push((name.to_string(), path)),
        }
    }

    pub fn path(&self, name: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.as_path())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads the model registered under `name`.
    ///
    /// # Errors
    /// Returns `ModelLoadError::UnknownModel` for unregistered names, or the
    /// error of the underlying load.
    pub fn load(&self, name: &str) -> Result<Box<dyn Predictor>, ModelLoadError> {
        let path = self
            .path(name)
            .ok_or_else(|| ModelLoadError::UnknownModel(name.to_string()))?;
        log::debug!("loading model '{name}' from {}", path.display());
        load_model(path)
    }
}

impl Default for ModelCatalog {
    /// The reference catalog: a single linear model in the working directory.
    fn default() -> Self {
        let mut catalog = Self::new();
        catalog.register(DEFAULT_MODEL_NAME, DEFAULT_MODEL_PATH);
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_linear_model() {
        let catalog = ModelCatalog::default();
        assert_eq!(
            catalog.path("linear"),
            Some(Path::new("phone_model.json"))
        );
    }

    #[test]
    fn register_replaces_existing_entry_in_place() {
        let mut catalog = ModelCatalog::new();
        catalog.register("a", "a.json");
        catalog.register("b", "b.json");
        catalog.register("a", "other.json");

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(catalog.path("a"), Some(Path::new("other.json")));
    }

    #[test]
    fn unknown_name_fails_to_load() {
        let catalog = ModelCatalog::new();
        assert!(matches!(
            catalog.load("missing"),
            Err(ModelLoadError::UnknownModel(name)) if name == "missing"
        ));
    }
}
