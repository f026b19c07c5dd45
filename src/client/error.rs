//! The stock typed error for client calls.
//!
//! The client is generic over its error type; [`CallError`] is the
//! vocabulary shipped with the crate, covering the two failure sources the
//! call pipeline has: the invocation itself and the decoding of the
//! response. Encoding has no error path — `Encode` is total.

use std::error::Error;
use std::fmt;

use static_assertions::assert_impl_all;

/// A typed error produced while running an operation.
///
/// Once a `CallError` enters an execution context it propagates unchanged
/// through every subsequent `map`/`flat_map` until the caller observes it;
/// the client never retries, downgrades, or substitutes a default.
///
/// # Examples
///
/// ```rust
/// use polycall::client::CallError;
///
/// let error = CallError::connection("connection refused");
/// assert!(error.is_connection());
/// assert_eq!(error.to_string(), "connection failed: connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallError {
    /// The invoker could not complete the external interaction.
    Connection {
        /// Description of the transport-level failure.
        message: String,
    },
    /// The response document did not match the shape the decoder expects.
    ///
    /// The raw wire value is discarded; only the description survives.
    MalformedResponse {
        /// Description of the mismatch.
        detail: String,
    },
}

impl CallError {
    /// Creates a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a malformed-response error.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            detail: detail.into(),
        }
    }

    /// Returns `true` for the connection variant.
    #[inline]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// Returns `true` for the malformed-response variant.
    #[inline]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection { message } => write!(formatter, "connection failed: {message}"),
            Self::MalformedResponse { detail } => write!(formatter, "malformed response: {detail}"),
        }
    }
}

impl Error for CallError {}

// Errors travel through deferred contexts across threads.
assert_impl_all!(CallError: Send, Sync, Clone);
