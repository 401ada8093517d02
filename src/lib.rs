//! url_fingerprint library: stable, configurable URL fingerprints.
//!
//! Computes a deterministic hash over a canonical subset of a URL's
//! components, so that superficially different but semantically
//! equivalent URLs (shuffled query parameters, optional scheme, userinfo
//! or fragment noise) compare equal.
//!
//! The pipeline is: validate the raw URL, extract the seven components
//! (scheme, userinfo, host, port, path, query, fragment), canonicalize
//! and sort the query string, render the selected components into a
//! fixed-key-order encoded string (the "gist"), and hash the gist keyed
//! by a secret.
//!
//! # Example
//!
//! ```
//! use url_fingerprint::{FingerprintConfig, FingerprintReader, HashAlgorithm};
//!
//! let config = FingerprintConfig::builder("my-secret", HashAlgorithm::Md5)
//!     .build()
//!     .unwrap();
//! let reader = FingerprintReader::new(config);
//!
//! let a = reader.capture("https://example.com/?b=42&a=1337").unwrap();
//! let b = reader.capture("https://example.com/?a=1337&b=42").unwrap();
//! assert!(reader.compare(&a, &b));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod gist;
pub mod hasher;
mod query;
mod reader;
mod validate;

// Re-export public API
pub use config::{FingerprintConfig, FingerprintConfigBuilder, HashAlgorithm, LogLevel, Opt};
pub use error::{ConfigError, InvalidUrl};
pub use hasher::{DigestHasher, GistHasher};
pub use reader::{Fingerprint, FingerprintReader};
