//! Query-string canonicalization.
//!
//! Reorders query parameters into a single canonical form so that URLs
//! differing only in parameter order produce identical gists.

/// Canonicalizes a raw query string.
///
/// Splits on `&`, drops empty tokens, renders each parameter as
/// `key=value` (boolean-style flags become `key=`), sorts the rendered
/// tokens by plain byte order of the whole token, and rejoins with `&`.
/// Keys and values are kept verbatim; array-style keys such as `a[]` are
/// opaque key text.
///
/// `None`, an empty string (the bare-`?` case), and a query consisting
/// only of `&` separators all yield `None`: an empty canonical query is
/// never rendered as `""`.
pub(crate) fn canonicalize_query(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let mut pairs: Vec<String> = raw
        .split('&')
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once('=') {
            Some((key, value)) => format!("{key}={value}"),
            None => format!("{token}="),
        })
        .collect();

    if pairs.is_empty() {
        return None;
    }

    // Whole-token byte order, not key order: `a=1337` sorts before
    // `a=42`, and `a=-1` before `a=1`.
    pairs.sort_unstable();
    Some(pairs.join("&"))
}
