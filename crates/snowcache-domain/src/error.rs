//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the entity cache
#[derive(Error, Debug)]
pub enum Error {
    /// A raw payload carried no usable (non-zero) identifier
    #[error("Identity not found: {message}")]
    IdentityNotFound {
        /// Why the identifier could not be resolved
        message: String,
    },

    /// Raw bytes did not match the expected entity structure
    #[error("Decode error: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A type-erased snapshot was not the entity type the cache manages
    #[error("Type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        /// Entity kind the cache expected
        expected: String,
        /// Description of what was received instead
        found: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Cache error creation methods
impl Error {
    /// Create an identity-not-found error
    pub fn identity_not_found<S: Into<String>>(message: S) -> Self {
        Self::IdentityNotFound {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Create a decode error with source
    pub fn decode_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<E: Into<String>, F: Into<String>>(expected: E, found: F) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

// Classification helpers
impl Error {
    /// True when the error came from identifier resolution
    pub fn is_identity_not_found(&self) -> bool {
        matches!(self, Self::IdentityNotFound { .. })
    }

    /// True when the error came from payload decoding
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
