//! Component selection and canonical gist serialization.

use serde::Serialize;

use crate::config::FingerprintConfig;
use crate::query::canonicalize_query;
use crate::validate::ValidatedUrl;

/// The seven canonical component values of a URL, in gist key order.
///
/// The derived `Serialize` impl emits the fields in declaration order,
/// which is what guarantees the fixed key order of the encoded gist. A
/// component whose inclusion flag is disabled holds its sentinel (`None`,
/// or `""` for the path) no matter what the real URL contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Gist {
    hash_scheme: Option<String>,
    hash_userinfo: Option<String>,
    hash_host: Option<String>,
    hash_port: Option<u16>,
    hash_path: String,
    hash_query: Option<String>,
    hash_fragment: Option<String>,
}

impl Gist {
    /// Applies the per-component inclusion policy to a validated URL.
    pub(crate) fn select(url: &ValidatedUrl, config: &FingerprintConfig) -> Self {
        Gist {
            hash_scheme: included(config.include_scheme(), &url.scheme),
            hash_userinfo: included(config.include_userinfo(), &url.userinfo),
            hash_host: included(config.include_host(), &url.host),
            hash_port: if config.include_port() { url.port } else { None },
            hash_path: if config.include_path() {
                url.path.clone()
            } else {
                String::new()
            },
            hash_query: if config.include_query() {
                canonicalize_query(url.query.as_deref())
            } else {
                None
            },
            hash_fragment: included(config.include_fragment(), &url.fragment),
        }
    }

    /// Renders the canonical encoded gist string.
    ///
    /// Byte-for-byte deterministic for equal inputs: same key order, same
    /// escaping, no extraneous whitespace. Downstream hash comparison
    /// depends on this.
    pub(crate) fn encode(&self) -> String {
        // A fixed-shape struct of strings and integers cannot fail to
        // serialize.
        serde_json::to_string(self).expect("gist serialization is infallible")
    }
}

fn included(include: bool, value: &Option<String>) -> Option<String> {
    if include {
        value.clone()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HashAlgorithm;
    use crate::validate::validate;

    fn all_on() -> FingerprintConfig {
        FingerprintConfig::builder("secret", HashAlgorithm::Md5)
            .build()
            .unwrap()
    }

    #[test]
    fn test_encoded_key_order_is_fixed() {
        let url = validate("http://example.com", true).unwrap();
        let gist = Gist::select(&url, &all_on());
        assert_eq!(
            gist.encode(),
            r#"{"hash_scheme":"http","hash_userinfo":null,"hash_host":"example.com","hash_port":null,"hash_path":"","hash_query":null,"hash_fragment":null}"#
        );
    }

    #[test]
    fn test_all_components_present() {
        let url = validate("https://user:pw@example.com:8443/p?b=2&a=1#frag", true).unwrap();
        let gist = Gist::select(&url, &all_on());
        assert_eq!(
            gist.encode(),
            r#"{"hash_scheme":"https","hash_userinfo":"user:pw","hash_host":"example.com","hash_port":8443,"hash_path":"/p","hash_query":"a=1&b=2","hash_fragment":"frag"}"#
        );
    }

    #[test]
    fn test_disabled_components_get_sentinels() {
        let config = FingerprintConfig::builder("secret", HashAlgorithm::Md5)
            .include_scheme(false)
            .include_userinfo(false)
            .include_host(false)
            .include_port(false)
            .include_path(false)
            .include_query(false)
            .include_fragment(false)
            .build()
            .unwrap();
        let url = validate("https://user:pw@example.com:8443/p?b=2&a=1#frag", true).unwrap();
        let gist = Gist::select(&url, &config);
        assert_eq!(
            gist.encode(),
            r#"{"hash_scheme":null,"hash_userinfo":null,"hash_host":null,"hash_port":null,"hash_path":"","hash_query":null,"hash_fragment":null}"#
        );
    }

    #[test]
    fn test_excluded_path_sentinel_is_empty_string() {
        // The path sentinel is `""`, not null: a URI always has a path
        // component, possibly empty.
        let config = FingerprintConfig::builder("secret", HashAlgorithm::Md5)
            .include_path(false)
            .build()
            .unwrap();
        let url = validate("https://example.com/real/path", true).unwrap();
        let gist = Gist::select(&url, &config);
        assert!(gist.encode().contains(r#""hash_path":"""#));
    }

    #[test]
    fn test_included_but_absent_port_is_null() {
        let url = validate("https://example.com/", true).unwrap();
        let gist = Gist::select(&url, &all_on());
        assert!(gist.encode().contains(r#""hash_port":null"#));
    }

    #[test]
    fn test_query_is_canonicalized_before_encoding() {
        let url = validate("https://example.com/?b=42&a=1337", true).unwrap();
        let gist = Gist::select(&url, &all_on());
        assert!(gist.encode().contains(r#""hash_query":"a=1337&b=42""#));
    }

    #[test]
    fn test_bare_query_marker_encodes_as_null() {
        let url = validate("https://example.com/?", true).unwrap();
        let gist = Gist::select(&url, &all_on());
        assert!(gist.encode().contains(r#""hash_query":null"#));
    }
}
