//! Fingerprint capture and comparison.

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::config::{FingerprintConfig, HashAlgorithm};
use crate::error::InvalidUrl;
use crate::gist::Gist;
use crate::hasher::{DigestHasher, GistHasher};
use crate::validate::validate;

/// A captured URL fingerprint.
///
/// Immutable value object pairing the canonical gist string with its
/// keyed hex digest and the algorithm that produced it. No reference to
/// the original URL or the configuration is retained beyond what the
/// gist itself encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fingerprint {
    gist: String,
    hash: String,
    hash_algorithm: HashAlgorithm,
}

impl Fingerprint {
    /// The canonical encoded string of the selected URL components.
    pub fn gist(&self) -> &str {
        &self.gist
    }

    /// The hex-encoded digest of `(algorithm, secret, gist)`.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The digest algorithm used for this fingerprint.
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }
}

/// Captures URL fingerprints under one immutable configuration.
///
/// `capture` and `compare` are pure functions of their inputs; a reader
/// holds no mutable state and is safe to share across threads.
///
/// # Examples
///
/// ```
/// use url_fingerprint::{FingerprintConfig, FingerprintReader, HashAlgorithm};
///
/// let config = FingerprintConfig::builder("my-secret", HashAlgorithm::Md5)
///     .include_scheme(false)
///     .build()
///     .unwrap();
/// let reader = FingerprintReader::new(config);
///
/// let a = reader.capture("http://example.com/a").unwrap();
/// let b = reader.capture("https://example.com/a").unwrap();
/// assert!(reader.compare(&a, &b));
/// ```
pub struct FingerprintReader {
    config: FingerprintConfig,
    hasher: Arc<dyn GistHasher>,
}

impl FingerprintReader {
    /// Creates a reader using the default digest-based hash collaborator.
    pub fn new(config: FingerprintConfig) -> Self {
        Self::with_hasher(config, Arc::new(DigestHasher))
    }

    /// Creates a reader with a custom hash collaborator.
    pub fn with_hasher(config: FingerprintConfig, hasher: Arc<dyn GistHasher>) -> Self {
        FingerprintReader { config, hasher }
    }

    /// Captures the fingerprint of a raw URL string.
    ///
    /// Runs the full pipeline: validation, component selection, gist
    /// serialization, and hashing.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUrl`] if the input fails validation; nothing
    /// after validation is fallible.
    pub fn capture(&self, raw_url: &str) -> Result<Fingerprint, InvalidUrl> {
        let url = validate(raw_url, self.config.include_scheme())?;
        let gist = Gist::select(&url, &self.config).encode();
        let hash = self
            .hasher
            .hash(self.config.hash_algorithm(), self.config.secret(), &gist);
        debug!("Captured fingerprint {hash} for URL: {}", raw_url.trim());
        Ok(Fingerprint {
            gist,
            hash,
            hash_algorithm: self.config.hash_algorithm(),
        })
    }

    /// Compares two fingerprints by hash alone.
    ///
    /// Never consults the original URLs. Both fingerprints are assumed to
    /// have been captured under the same configuration; fingerprints from
    /// different configurations are not meaningfully comparable.
    pub fn compare(&self, a: &Fingerprint, b: &Fingerprint) -> bool {
        a.hash == b.hash
    }
}
