// Translator backed by nested JSON catalogs, one per language.
//
// Purpose
// - Resolve dotted keys such as `toast.employeeCreated` against the catalog of a language.
// - Replace `{{name}}` placeholders with the given parameters.
//
// Responsibilities
// - A missing language or key resolves to the key itself and logs a warning.

use crate::core::ports::Translator;
use crate::core::store::state::Language;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Clone)]
pub struct CatalogTranslator {
    catalogs: HashMap<Language, Value>,
}

impl CatalogTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, language: Language, catalog: Value) -> Self {
        self.catalogs.insert(language, catalog);
        self
    }

    /// Load `<code>.json` for every supported language found in `dir`.
    pub async fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut translator = Self::new();
        for language in Language::ALL {
            let path = dir.join(format!("{}.json", language.code()));
            let raw = match tokio::fs::read_to_string(&path).await {
                Ok(raw) => raw,
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(CatalogError::Io {
                        path: path.display().to_string(),
                        source,
                    });
                }
            };
            let catalog = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;
            translator.catalogs.insert(language, catalog);
        }
        Ok(translator)
    }

    fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let mut node = self.catalogs.get(&language)?;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        node.as_str()
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, language: Language, key: &str, params: &[(&str, &str)]) -> String {
        let Some(text) = self.lookup(language, key) else {
            tracing::warn!(key, %language, "translation key not found");
            return key.to_string();
        };
        params.iter().fold(text.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{{{name}}}}}"), value)
        })
    }
}
