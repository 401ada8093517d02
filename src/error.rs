//! Error types for URL validation and configuration.

use thiserror::Error;

/// Validation failures raised by [`crate::FingerprintReader::capture`].
///
/// These are the only fallible paths in the crate: once a URL has been
/// validated, selection, canonicalization, and serialization cannot fail.
/// The message text is part of the public contract and is matched by
/// caller-facing tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidUrl {
    /// The input was empty (or whitespace-only) after trimming.
    #[error("The URL string is empty!")]
    Empty,

    /// The configuration requires a scheme but the URL has none.
    #[error("The scheme for url ({url}) is missing!")]
    MissingScheme {
        /// The trimmed input URL.
        url: String,
    },

    /// A scheme is present but the rest of the URL is syntactically
    /// unusable for it (e.g. `https://` with nothing after the
    /// authority marker, or a non-numeric port).
    #[error("The uri `{url}` is invalid for the `{scheme}` scheme.")]
    Malformed {
        /// The trimmed input URL.
        url: String,
        /// The scheme that was present in the input.
        scheme: String,
    },
}

/// Configuration construction failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The hashing secret was empty after trimming.
    #[error("The fingerprint secret must not be empty")]
    EmptySecret,
}
