//! Configuration loading and management

use crate::core::error::{ConfigError, OrderResult};
use crate::core::store::OrderStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Default LMDB map size; LMDB only reserves address space for it
pub const DEFAULT_MAP_SIZE_MB: usize = 256;

/// Which storage backend holds the orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    InMemory,
    #[default]
    Lmdb,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::InMemory => "in_memory",
            BackendKind::Lmdb => "lmdb",
        }
    }
}

/// Store configuration
///
/// # Example
///
/// ```yaml
/// backend: lmdb
/// path: /var/lib/shoppier/orders
/// map_size_mb: 512
/// currency: TL
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: BackendKind,

    /// Directory of the LMDB environment (lmdb backend only)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// LMDB map size in megabytes
    #[serde(default = "default_map_size_mb")]
    pub map_size_mb: usize,

    /// Suffix used when formatting prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_map_size_mb() -> usize {
    DEFAULT_MAP_SIZE_MB
}

fn default_currency() -> String {
    "TL".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl StoreConfig {
    /// Configuration for a throwaway in-memory store
    pub fn in_memory() -> Self {
        Self {
            backend: BackendKind::InMemory,
            path: None,
            map_size_mb: default_map_size_mb(),
            currency: default_currency(),
        }
    }

    /// Configuration for an LMDB store in `path`
    pub fn lmdb(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: BackendKind::Lmdb,
            path: Some(path.into()),
            ..Self::in_memory()
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the selected backend has what it needs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == BackendKind::Lmdb && self.path.is_none() {
            return Err(ConfigError::MissingValue {
                backend: self.backend.as_str().to_string(),
                key: "path".to_string(),
            });
        }
        Ok(())
    }

    /// Build the store described by this configuration
    pub fn open(&self) -> OrderResult<OrderStore> {
        self.validate()?;
        tracing::info!(backend = self.backend.as_str(), "opening order store");

        match self.backend {
            BackendKind::InMemory => self.open_in_memory(),
            BackendKind::Lmdb => self.open_lmdb(),
        }
    }

    #[cfg(feature = "in-memory")]
    fn open_in_memory(&self) -> OrderResult<OrderStore> {
        Ok(OrderStore::new(Arc::new(
            crate::storage::InMemoryOrderService::new(),
        )))
    }

    #[cfg(not(feature = "in-memory"))]
    fn open_in_memory(&self) -> OrderResult<OrderStore> {
        Err(self.disabled().into())
    }

    #[cfg(feature = "lmdb")]
    fn open_lmdb(&self) -> OrderResult<OrderStore> {
        let path = self.path.as_ref().ok_or_else(|| ConfigError::MissingValue {
            backend: self.backend.as_str().to_string(),
            key: "path".to_string(),
        })?;
        let service = crate::storage::LmdbOrderService::open(path, self.map_size_mb)?;
        Ok(OrderStore::new(Arc::new(service)))
    }

    #[cfg(not(feature = "lmdb"))]
    fn open_lmdb(&self) -> OrderResult<OrderStore> {
        Err(self.disabled().into())
    }

    #[allow(dead_code)]
    fn disabled(&self) -> ConfigError {
        ConfigError::BackendDisabled {
            backend: self.backend.as_str().to_string(),
        }
    }
}
