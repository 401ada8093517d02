//! The hash collaborator: turns a gist into a hex digest.
//!
//! The fingerprint core only requires determinism from this boundary; the
//! default implementation is a plain digest over `secret ‖ message`, but
//! callers may plug in any [`GistHasher`] (e.g. an HMAC construction or a
//! remote keyed-hash service).

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::config::HashAlgorithm;

/// Deterministic keyed hashing of canonical gist strings.
///
/// Implementations must be pure: the same `(algorithm, secret, message)`
/// triple always yields the same hex string.
pub trait GistHasher: Send + Sync {
    /// Hashes `message` keyed by `secret` with the given algorithm,
    /// returning a lowercase hex digest.
    fn hash(&self, algorithm: HashAlgorithm, secret: &str, message: &str) -> String;
}

/// Default [`GistHasher`]: digest over the secret followed by the message.
#[derive(Debug, Default, Clone, Copy)]
pub struct DigestHasher;

impl GistHasher for DigestHasher {
    fn hash(&self, algorithm: HashAlgorithm, secret: &str, message: &str) -> String {
        match algorithm {
            HashAlgorithm::Md5 => hex_digest::<Md5>(secret, message),
            HashAlgorithm::Sha1 => hex_digest::<Sha1>(secret, message),
            HashAlgorithm::Sha256 => hex_digest::<Sha256>(secret, message),
        }
    }
}

fn hex_digest<D: Digest>(secret: &str, message: &str) -> String {
    let mut hasher = D::new();
    hasher.update(secret.as_bytes());
    hasher.update(message.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_digest_lengths() {
        let hasher = DigestHasher;
        for algorithm in HashAlgorithm::iter() {
            let digest = hasher.hash(algorithm, "secret", "message");
            let expected_len = match algorithm {
                HashAlgorithm::Md5 => 32,
                HashAlgorithm::Sha1 => 40,
                HashAlgorithm::Sha256 => 64,
            };
            assert_eq!(digest.len(), expected_len, "length for {algorithm}");
            assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_secret_is_prepended_to_message() {
        // Standard test vectors for the concatenated input "abc".
        let hasher = DigestHasher;
        assert_eq!(
            hasher.hash(HashAlgorithm::Md5, "a", "bc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            hasher.hash(HashAlgorithm::Sha1, "a", "bc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            hasher.hash(HashAlgorithm::Sha256, "a", "bc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_deterministic() {
        let hasher = DigestHasher;
        let first = hasher.hash(HashAlgorithm::Sha256, "secret", "gist");
        let second = hasher.hash(HashAlgorithm::Sha256, "secret", "gist");
        assert_eq!(first, second);
    }

    #[test]
    fn test_secret_changes_digest() {
        let hasher = DigestHasher;
        assert_ne!(
            hasher.hash(HashAlgorithm::Md5, "one", "gist"),
            hasher.hash(HashAlgorithm::Md5, "two", "gist")
        );
    }
}
