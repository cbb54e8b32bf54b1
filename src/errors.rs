//! Unified error type for the expense ledger.
//!
//! Store failures are split into [`Error::Network`] (the store could not be
//! reached) and [`Error::Server`] (the store answered, but not with a usable
//! 2xx response) so the view layer can report them differently.

use thiserror::Error;

/// All errors produced by the ledger.
#[derive(Debug, Error)]
pub enum Error {
    /// The item store could not be reached (connect failure, timeout, reset).
    #[error("Item store unreachable: {message}")]
    Network {
        /// Underlying transport error description
        message: String,
    },

    /// The item store answered with a non-2xx status or an undecodable body.
    #[error("Item store returned {status}: {body}")]
    Server {
        /// HTTP status code returned by the store
        status: u16,
        /// Response body, or a decode error description
        body: String,
    },

    /// A request the store cannot accept, such as when item ids run out.
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Configuration file or environment problems.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// I/O error while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
