//! Transformer options.
//!
//! The options record arrives as the transformer's plugin entry in a
//! tsconfig (`compilerOptions.plugins[]`). No options are recognised today;
//! the record exists so hosts have a stable place to pass them later.
//! Keys the host itself uses (`"transform"`, `"after"`, ...) are ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options for [`ConstEnumUuidTransformer`](crate::ConstEnumUuidTransformer).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformerConfig {
    #[serde(skip)]
    _reserved: (),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid transformer config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("transformer config must be a JSON object, found {found}")]
    InvalidShape { found: &'static str },
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl TransformerConfig {
    /// Parse a plugin entry from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    /// Parse a plugin entry that the host already decoded.
    ///
    /// `null` is accepted and means "no options".
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        match value {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(ConfigError::InvalidShape {
                found: json_type_name(&other),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../tests/config.rs"]
mod tests;
