//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. Exactly two
//! kinds cross the boundary for bridge operations: client errors detected
//! before any native call, and native-subsystem rejections after one.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the herald bridge.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed client input, detected before the native layer is touched
    /// (unknown option name, unparsable timestamp). Never retried; the
    /// offending value is named in the message.
    #[error("{0}")]
    InvalidArguments(String),

    /// The native subsystem rejected an operation after being invoked.
    /// Carries the native description verbatim; the bridge has no way to
    /// remediate a native failure.
    #[error("{0}")]
    Native(String),

    /// Unknown service or method on the message channel.
    #[error("not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Convert to the error code carried in the wire error envelope.
    ///
    /// `UNNotificationError` is the code the application-side client was
    /// built against for native rejections; it is kept for compatibility.
    pub fn to_wire_code(&self) -> &'static str {
        match self {
            Error::InvalidArguments(_) => "InvalidArguments",
            Error::Native(_) => "UNNotificationError",
            Error::NotFound(_) => "NotFound",
            Error::Serialization(_) | Error::Io(_) => "Internal",
        }
    }
}

// Convenience constructors
impl Error {
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    pub fn native(msg: impl Into<String>) -> Self {
        Self::Native(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
