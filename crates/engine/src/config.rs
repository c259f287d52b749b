//! Engine configuration via `jsontext.toml`
//!
//! The embedding application picks the operator backend, the default return
//! type and the document limits once, at construction time. Nothing here is
//! consulted again while a query runs.

use crate::normalize::ReturnType;
use crate::vocabulary::OperatorVocabulary;
use jsontext_core::{DocumentLimits, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Config file name
pub const CONFIG_FILE_NAME: &str = "jsontext.toml";

/// Engine configuration loaded from `jsontext.toml`.
///
/// # Example
///
/// ```toml
/// backend = "postgres"
/// return_type = "json"
///
/// [limits]
/// max_nesting_depth = 64
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Operator vocabulary: `"postgres"`
    #[serde(default)]
    pub backend: OperatorVocabulary,
    /// Default return type: `"json"`, `"array"` or `"silverstripe"`
    #[serde(default)]
    pub return_type: ReturnType,
    /// Document limits
    #[serde(default)]
    pub limits: DocumentLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: OperatorVocabulary::default(),
            return_type: ReturnType::default(),
            limits: DocumentLimits::default(),
        }
    }
}

// Names are kept as strings until validated, so each bad value keeps its
// own error kind.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    backend: Option<String>,
    #[serde(default)]
    return_type: Option<String>,
    #[serde(default)]
    limits: DocumentLimits,
}

impl EngineConfig {
    /// Config with the given backend and defaults elsewhere
    pub fn with_backend(backend: OperatorVocabulary) -> Self {
        Self {
            backend,
            ..Self::default()
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# jsontext engine configuration
#
# Operator backend: "postgres" (default)
#   "postgres" = -> (matchOnInt), ->> (matchOnStr), #> (matchOnPath)
backend = "postgres"

# Default return type: "json" (default), "array" or "silverstripe"
return_type = "json"

# Document limits. Omitted fields keep their defaults.
[limits]
max_document_size = 16777216
max_nesting_depth = 100
max_array_size = 1000000
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// `Configuration` if the text is not valid TOML or names an unknown
    /// backend; `InvalidArgument` if it names an unknown return type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content).map_err(|e| {
            warn!(target: "jsontext::config", error = %e, "Rejected config");
            Error::configuration(format!("failed to parse config: {}", e))
        })?;
        let backend = match raw.backend.as_deref() {
            Some(name) => OperatorVocabulary::from_name(name).map_err(|e| {
                warn!(target: "jsontext::config", backend = name, "Unknown backend");
                e
            })?,
            None => OperatorVocabulary::default(),
        };
        let return_type = match raw.return_type.as_deref() {
            Some(mode) => mode.parse::<ReturnType>().map_err(|e| {
                warn!(target: "jsontext::config", return_type = mode, "Unknown return type");
                e
            })?,
            None => ReturnType::default(),
        };
        let config = EngineConfig {
            backend,
            return_type,
            limits: raw.limits,
        };
        debug!(
            target: "jsontext::config",
            backend = %config.backend,
            return_type = %config.return_type,
            "Loaded engine config"
        );
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::configuration(format!(
                    "failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::configuration(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
