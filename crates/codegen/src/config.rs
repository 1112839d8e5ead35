//! Generator configuration, read from a TOML file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_RUNTIME: &str = "gqlbind_runtime";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Path of the runtime crate as seen from the generated file.
    pub runtime: String,
    /// Words escaped in addition to the Rust keywords.
    pub reserved_words: Vec<String>,
    /// Custom scalar name to Rust type.
    pub scalars: BTreeMap<String, String>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            runtime: DEFAULT_RUNTIME.to_string(),
            reserved_words: Vec::new(),
            scalars: BTreeMap::new(),
        }
    }
}

impl CodegenConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Rust type a custom scalar maps to.
    pub fn scalar_type(&self, name: &str) -> String {
        match self.scalars.get(name) {
            Some(ty) => ty.clone(),
            None => format!("{}::serde_json::Value", self.runtime),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = CodegenConfig::from_toml_str("").unwrap();
        assert_eq!(config, CodegenConfig::default());
        assert_eq!(config.runtime, "gqlbind_runtime");
    }

    #[test]
    fn test_full_config() {
        let config = CodegenConfig::from_toml_str(
            r#"
runtime = "crate::gql"
reserved_words = ["model"]

[scalars]
DateTime = "String"
"#,
        )
        .unwrap();
        assert_eq!(config.runtime, "crate::gql");
        assert_eq!(config.reserved_words, vec!["model".to_string()]);
        assert_eq!(config.scalar_type("DateTime"), "String");
        assert_eq!(config.scalar_type("Url"), "crate::gql::serde_json::Value");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CodegenConfig::from_toml_str("runtim = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CodegenConfig::from_path(Path::new("/nonexistent/gqlbind.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
