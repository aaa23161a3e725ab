//! URL validation and normalization.
//!
//! Shortened URLs are stored in canonical form so the same target always
//! produces the same stored value.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizeError {
    #[error("malformed url: {0}")]
    Malformed(String),

    #[error("unsupported scheme '{0}': only http and https are allowed")]
    UnsupportedScheme(String),
}

/// Normalizes a URL to a canonical form.
///
/// Parsing already lowercases the host and drops default ports; on top of
/// that the fragment is removed, since it never reaches the server and two
/// URLs differing only in fragment point at the same resource. Path, query,
/// and their case are preserved.
///
/// Schemes other than `http` and `https` are rejected outright, which also
/// shuts out `javascript:` and `data:` style payloads.
///
/// # Errors
///
/// Returns [`UrlNormalizeError::Malformed`] for unparseable input and
/// [`UrlNormalizeError::UnsupportedScheme`] for non-HTTP(S) URLs.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizeError> {
    let mut url = Url::parse(input).map_err(|e| UrlNormalizeError::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlNormalizeError::UnsupportedScheme(other.to_string())),
    }

    url.set_fragment(None);

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_canonical_url_through() {
        assert_eq!(
            normalize_url("https://example.com/page").unwrap(),
            "https://example.com/page"
        );
    }

    #[test]
    fn lowercases_scheme_and_host() {
        assert_eq!(
            normalize_url("HTTPS://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn strips_default_ports() {
        assert_eq!(
            normalize_url("http://example.com:80/a").unwrap(),
            "http://example.com/a"
        );
        assert_eq!(
            normalize_url("https://example.com:443/a").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn keeps_explicit_ports() {
        assert_eq!(
            normalize_url("http://example.com:8080/a").unwrap(),
            "http://example.com:8080/a"
        );
    }

    #[test]
    fn removes_fragment_but_keeps_query() {
        assert_eq!(
            normalize_url("https://example.com/search?q=rust#results").unwrap(),
            "https://example.com/search?q=rust"
        );
    }

    #[test]
    fn rejects_non_http_schemes() {
        for input in ["ftp://example.com/file", "javascript:alert(1)", "data:text/plain,hi"] {
            let err = normalize_url(input).unwrap_err();
            assert!(matches!(err, UrlNormalizeError::UnsupportedScheme(_)), "{input}");
        }
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            normalize_url("not a url").unwrap_err(),
            UrlNormalizeError::Malformed(_)
        ));
        assert!(matches!(
            normalize_url("").unwrap_err(),
            UrlNormalizeError::Malformed(_)
        ));
    }
}
