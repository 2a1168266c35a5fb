//! Typed error handling for the order store
//!
//! Every store operation returns [`OrderResult`], so callers can match on the
//! exact failure instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: rejected input on creation (never persisted)
//! - [`StorageError`]: the backend failed to read or commit
//! - [`ConfigError`]: the store configuration could not be loaded
//! - [`OrderError::NotFound`]: an operation referenced an unknown id
//!
//! # Example
//!
//! ```rust,ignore
//! match store.create("Bag A", "199.90", None, None).await {
//!     Ok(order) => println!("saved {}", order.id),
//!     Err(OrderError::Validation(ValidationError::MissingImage)) => {
//!         println!("select an image first");
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// The main error type returned by the order store
#[derive(Debug, Error)]
pub enum OrderError {
    /// Input rejected before anything was written
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No order with this id exists
    #[error("Order with id {id} not found")]
    NotFound { id: Uuid },

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl OrderError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::Validation(e) => e.error_code(),
            OrderError::NotFound { .. } => "ORDER_NOT_FOUND",
            OrderError::Storage(_) => "STORAGE_ERROR",
            OrderError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the caller can fix the problem by changing its input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            OrderError::Validation(_) | OrderError::NotFound { .. }
        )
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to order input validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Creation attempted without image bytes
    #[error("An order requires an image")]
    MissingImage,

    /// Name is empty once surrounding whitespace is removed
    #[error("Order name must not be empty")]
    EmptyName,

    /// Price parsed to a number below zero
    #[error("Order price must not be negative (value: {value})")]
    NegativePrice { value: Decimal },

    /// Price text is not a decimal number (strict parsing only)
    #[error("Invalid price: '{text}'")]
    InvalidPrice { text: String },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingImage => "MISSING_IMAGE",
            ValidationError::EmptyName => "EMPTY_NAME",
            ValidationError::NegativePrice { .. } => "NEGATIVE_PRICE",
            ValidationError::InvalidPrice { .. } => "INVALID_PRICE",
        }
    }

    /// The input field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingImage => "image",
            ValidationError::EmptyName => "name",
            ValidationError::NegativePrice { .. } | ValidationError::InvalidPrice { .. } => {
                "price"
            }
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lock guarding the in-memory collection was poisoned
    #[error("Failed to acquire {kind} lock: {message}")]
    Lock { kind: &'static str, message: String },

    /// The embedded database reported an error
    #[cfg(feature = "lmdb")]
    #[error("lmdb error: {0}")]
    Backend(#[from] heed::Error),

    /// Filesystem error while preparing the storage directory
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized
    #[error("failed to encode order: {0}")]
    Encode(#[source] serde_json::Error),

    /// A stored record could not be deserialized
    #[error("failed to decode order: {0}")]
    Decode(#[source] serde_json::Error),

    /// The blocking storage task panicked or was cancelled
    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// An order with the same id is already stored
    #[error("Order with id {id} already exists")]
    DuplicateId { id: Uuid },

    /// A stored sequence key is not a number
    #[error("corrupt sequence key '{key}'")]
    CorruptKey { key: String },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors related to loading the store configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid YAML for [`StoreConfig`](crate::config::StoreConfig)
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The selected backend needs a setting that is missing
    #[error("Missing config value '{key}' for backend '{backend}'")]
    MissingValue { backend: String, key: String },

    /// The selected backend was not compiled in
    #[error("Storage backend '{backend}' is not enabled in this build")]
    BackendDisabled { backend: String },
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for order store operations
pub type OrderResult<T> = Result<T, OrderError>;

/// Result type used inside storage backends
pub type StorageResult<T> = Result<T, StorageError>;
