//! Addon configuration, parsed from TOML.
//!
//! ```toml
//! [arithmetic]
//! overflow = "checked"   # or "wrapping" (default)
//!
//! [arguments]
//! coercion = "strict"    # or "int32" (default)
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaldaConfig {
    pub arithmetic: ArithmeticConfig,
    pub arguments: ArgumentConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArithmeticConfig {
    pub overflow: OverflowPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArgumentConfig {
    pub coercion: Coercion,
}

/// What happens when a sum does not fit in an `i32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's-complement wraparound.
    #[default]
    Wrapping,
    /// Fail with `ArithmeticError::Overflow`.
    Checked,
}

/// How a host number is converted to an `i32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coercion {
    /// `napi_get_value_int32` semantics: truncate, wrap modulo 2^32, non-finite → 0.
    #[default]
    Int32,
    /// Only finite integral values inside the `i32` range are accepted.
    Strict,
}

impl BaldaConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
