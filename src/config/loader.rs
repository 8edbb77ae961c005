use nalgebra::SVector;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Config document must be a mapping of keys to values")]
    NotAMapping,
    #[error("Missing required parameter '{key}'")]
    MissingKey { key: String },
    #[error("Parameter '{key}' has the wrong type: {source}")]
    TypeMismatch {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Parameter '{key}' expects {expected} values, found {actual}")]
    DimensionMismatch {
        key: String,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid parameter configuration: {0}")]
    ValidationError(String),
}

/// A parsed configuration document: a flat mapping from parameter names to
/// either a scalar or a sequence of numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    entries: Mapping,
}

impl ConfigDocument {
    /// Wraps an already parsed YAML value.
    ///
    /// An empty (null) document is accepted as a mapping with no entries.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Mapping(entries) => Ok(Self { entries }),
            Value::Null => Ok(Self::default()),
            _ => Err(ConfigError::NotAMapping),
        }
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml::from_str(contents)?;
        Self::from_value(value)
    }

    /// Reads and parses a YAML file. The file is not held open after parsing.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Reading parameter file {}", path.display());
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    /// Looks up the raw value stored under `key`.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Top-level keys that are strings, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().filter_map(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn insert<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.entries.insert(Value::from(key), value.into());
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(&self.entries)?)
    }
}

fn require<'a>(document: &'a ConfigDocument, key: &str) -> Result<&'a Value, ConfigError> {
    document.lookup(key).ok_or_else(|| ConfigError::MissingKey {
        key: key.to_string(),
    })
}

/// Reads a scalar parameter into `value`.
///
/// The entry is converted to the destination's type (`f64`, `i32`, ...).
/// `value` is only written once the conversion has succeeded.
pub fn read_param<T: DeserializeOwned>(
    document: &ConfigDocument,
    key: &str,
    value: &mut T,
) -> Result<(), ConfigError> {
    let raw = require(document, key)?;
    *value = serde_yaml::from_value(raw.clone()).map_err(|source| ConfigError::TypeMismatch {
        key: key.to_string(),
        source,
    })?;
    Ok(())
}

/// Reads a sequence of numbers into a fixed-length vector.
///
/// The sequence length must equal `N` exactly; anything else is a
/// `DimensionMismatch` and `value` is left untouched.
pub fn read_vector<const N: usize>(
    document: &ConfigDocument,
    key: &str,
    value: &mut SVector<f64, N>,
) -> Result<(), ConfigError> {
    let raw = require(document, key)?;
    let elements: Vec<f64> =
        serde_yaml::from_value(raw.clone()).map_err(|source| ConfigError::TypeMismatch {
            key: key.to_string(),
            source,
        })?;
    if elements.len() != N {
        return Err(ConfigError::DimensionMismatch {
            key: key.to_string(),
            expected: N,
            actual: elements.len(),
        });
    }
    *value = SVector::<f64, N>::from_column_slice(&elements);
    Ok(())
}
