//! Fingerprint configuration and CLI option types.

use clap::{Parser, ValueEnum};
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::ConfigError;

/// Digest algorithm used to hash a gist.
///
/// Resolved by the hash collaborator (see [`crate::hasher`]). `Md5` renders
/// as a 32-character hex string; the SHA variants are stronger drop-ins.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5 (128-bit, 32 hex characters)
    Md5,
    /// SHA-1 (160-bit, 40 hex characters)
    Sha1,
    /// SHA-256 (256-bit, 64 hex characters)
    Sha256,
}

/// Immutable configuration for a [`crate::FingerprintReader`].
///
/// Constructed once through [`FingerprintConfig::builder`]; read-only
/// afterwards. Every capture under the same configuration is a pure
/// function of the input URL string.
///
/// The seven inclusion flags control which URL components contribute
/// their real value to the gist; a disabled component is replaced by a
/// fixed sentinel (`null`, or `""` for the path) rather than omitted.
///
/// # Examples
///
/// ```
/// use url_fingerprint::{FingerprintConfig, HashAlgorithm};
///
/// let config = FingerprintConfig::builder("my-secret", HashAlgorithm::Md5)
///     .include_fragment(false)
///     .build()
///     .unwrap();
/// assert!(config.include_scheme());
/// assert!(!config.include_fragment());
/// ```
#[derive(Debug, Clone)]
pub struct FingerprintConfig {
    secret: String,
    hash_algorithm: HashAlgorithm,
    include_scheme: bool,
    include_userinfo: bool,
    include_host: bool,
    include_port: bool,
    include_path: bool,
    include_query: bool,
    include_fragment: bool,
}

impl FingerprintConfig {
    /// Starts building a configuration with the required secret and
    /// algorithm. All seven inclusion flags default to `true`.
    pub fn builder(
        secret: impl Into<String>,
        hash_algorithm: HashAlgorithm,
    ) -> FingerprintConfigBuilder {
        FingerprintConfigBuilder {
            secret: secret.into(),
            hash_algorithm,
            include_scheme: true,
            include_userinfo: true,
            include_host: true,
            include_port: true,
            include_path: true,
            include_query: true,
            include_fragment: true,
        }
    }

    /// The keying material mixed into every hash.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The digest algorithm used for every capture.
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    /// Whether the scheme contributes its real value to the gist.
    pub fn include_scheme(&self) -> bool {
        self.include_scheme
    }

    /// Whether the userinfo contributes its real value to the gist.
    pub fn include_userinfo(&self) -> bool {
        self.include_userinfo
    }

    /// Whether the host contributes its real value to the gist.
    pub fn include_host(&self) -> bool {
        self.include_host
    }

    /// Whether the port contributes its real value to the gist.
    pub fn include_port(&self) -> bool {
        self.include_port
    }

    /// Whether the path contributes its real value to the gist.
    pub fn include_path(&self) -> bool {
        self.include_path
    }

    /// Whether the query contributes its canonicalized value to the gist.
    pub fn include_query(&self) -> bool {
        self.include_query
    }

    /// Whether the fragment contributes its real value to the gist.
    pub fn include_fragment(&self) -> bool {
        self.include_fragment
    }
}

/// Builder for [`FingerprintConfig`].
///
/// Validation happens in [`build`](Self::build): an empty (or
/// whitespace-only) secret fails fast with [`ConfigError::EmptySecret`].
#[derive(Debug, Clone)]
pub struct FingerprintConfigBuilder {
    secret: String,
    hash_algorithm: HashAlgorithm,
    include_scheme: bool,
    include_userinfo: bool,
    include_host: bool,
    include_port: bool,
    include_path: bool,
    include_query: bool,
    include_fragment: bool,
}

impl FingerprintConfigBuilder {
    /// Sets whether the scheme contributes its real value.
    pub fn include_scheme(mut self, include: bool) -> Self {
        self.include_scheme = include;
        self
    }

    /// Sets whether the userinfo contributes its real value.
    pub fn include_userinfo(mut self, include: bool) -> Self {
        self.include_userinfo = include;
        self
    }

    /// Sets whether the host contributes its real value.
    pub fn include_host(mut self, include: bool) -> Self {
        self.include_host = include;
        self
    }

    /// Sets whether the port contributes its real value.
    pub fn include_port(mut self, include: bool) -> Self {
        self.include_port = include;
        self
    }

    /// Sets whether the path contributes its real value.
    pub fn include_path(mut self, include: bool) -> Self {
        self.include_path = include;
        self
    }

    /// Sets whether the query contributes its canonicalized value.
    pub fn include_query(mut self, include: bool) -> Self {
        self.include_query = include;
        self
    }

    /// Sets whether the fragment contributes its real value.
    pub fn include_fragment(mut self, include: bool) -> Self {
        self.include_fragment = include;
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecret`] if the secret is empty after
    /// trimming.
    pub fn build(self) -> Result<FingerprintConfig, ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(FingerprintConfig {
            secret: self.secret,
            hash_algorithm: self.hash_algorithm,
            include_scheme: self.include_scheme,
            include_userinfo: self.include_userinfo,
            include_host: self.include_host,
            include_port: self.include_port,
            include_path: self.include_path,
            include_query: self.include_query,
            include_fragment: self.include_fragment,
        })
    }
}

/// Logging level for the CLI binary.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace). Used with the `--log-level` option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line options for the `url-fingerprint` binary.
///
/// This struct is generated by `clap` from the field attributes. The
/// seven `--no-*` flags disable the corresponding component's
/// contribution to the gist (all components are included by default).
///
/// # Examples
///
/// ```bash
/// # Fingerprint two URLs with the default MD5 algorithm
/// url-fingerprint --secret s3cret https://example.com/?b=2&a=1 https://example.com/?a=1&b=2
///
/// # Read URLs from stdin, ignore scheme and fragment, emit JSON
/// cat urls.txt | url-fingerprint --secret s3cret --no-scheme --no-fragment --json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "url-fingerprint",
    about = "Computes stable fingerprints of URLs for deduplication."
)]
pub struct Opt {
    /// URLs to fingerprint; reads from stdin (one per line) when empty
    #[arg(value_parser)]
    pub urls: Vec<String>,

    /// Secret keying material mixed into every hash
    #[arg(long)]
    pub secret: String,

    /// Digest algorithm: md5|sha1|sha256
    #[arg(long, value_enum, default_value_t = HashAlgorithm::Md5)]
    pub algorithm: HashAlgorithm,

    /// Exclude the scheme from the fingerprint
    #[arg(long)]
    pub no_scheme: bool,

    /// Exclude the userinfo from the fingerprint
    #[arg(long)]
    pub no_userinfo: bool,

    /// Exclude the host from the fingerprint
    #[arg(long)]
    pub no_host: bool,

    /// Exclude the port from the fingerprint
    #[arg(long)]
    pub no_port: bool,

    /// Exclude the path from the fingerprint
    #[arg(long)]
    pub no_path: bool,

    /// Exclude the query string from the fingerprint
    #[arg(long)]
    pub no_query: bool,

    /// Exclude the fragment from the fingerprint
    #[arg(long)]
    pub no_fragment: bool,

    /// Emit one JSON object per URL instead of `<hash>  <url>` lines
    #[arg(long)]
    pub json: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Opt {
    /// Builds the immutable fingerprint configuration from the CLI flags.
    pub fn to_config(&self) -> Result<FingerprintConfig, ConfigError> {
        FingerprintConfig::builder(self.secret.clone(), self.algorithm)
            .include_scheme(!self.no_scheme)
            .include_userinfo(!self.no_userinfo)
            .include_host(!self.no_host)
            .include_port(!self.no_port)
            .include_path(!self.no_path)
            .include_query(!self.no_query)
            .include_fragment(!self.no_fragment)
            .build()
    }
}
