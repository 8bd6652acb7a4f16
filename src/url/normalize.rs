use crate::UrlError;
use url::Url;

/// Normalizes a raw link discovered on a page into its canonical form
///
/// # Resolution
///
/// * A link starting with `/` is resolved against `base`
/// * A link with an `http` or `https` scheme is taken as already absolute
/// * Anything else (`javascript:`, `mailto:`, fragment-only `#...`, empty,
///   scheme-less relative paths) is invalid and rejected
///
/// # Canonical form
///
/// * Scheme forced to `https`
/// * Host lowercased (the `url` crate does this on parse)
/// * Query string and fragment dropped
/// * Trailing slashes stripped from the path, including the root, so
///   `https://example.com/` becomes `https://example.com`
///
/// The result is idempotent: normalizing an already-normalized URL returns
/// the identical string. Because the root form has no trailing slash, the
/// canonical form is returned as a `String` rather than a `Url`.
///
/// # Arguments
///
/// * `base` - The crawl's starting URL, used to resolve rooted links
/// * `raw` - The raw link string as found in the page
///
/// # Returns
///
/// * `Ok(String)` - The canonical absolute URL
/// * `Err(UrlError)` - The link is invalid and should be dropped
///
/// # Examples
///
/// ```
/// use linkmap::normalize_link;
/// use url::Url;
///
/// let base = Url::parse("https://example.com").unwrap();
/// assert_eq!(
///     normalize_link(&base, "/page2").unwrap(),
///     "https://example.com/page2"
/// );
/// assert_eq!(
///     normalize_link(&base, "http://Example.COM/a/").unwrap(),
///     "https://example.com/a"
/// );
/// assert!(normalize_link(&base, "mailto:test@example.com").is_err());
/// ```
pub fn normalize_link(base: &Url, raw: &str) -> Result<String, UrlError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(UrlError::Empty);
    }

    let mut url = if raw.starts_with('/') {
        base.join(raw)
            .map_err(|e| UrlError::Parse(e.to_string()))?
    } else {
        let parsed = Url::parse(raw).map_err(|e| UrlError::Parse(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(UrlError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        parsed
    };

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    if url.scheme() == "http" {
        url.set_scheme("https")
            .map_err(|_| UrlError::Malformed("cannot upgrade scheme to https".to_string()))?;
    }

    url.set_fragment(None);
    url.set_query(None);

    // With query and fragment gone, any trailing slashes in the serialized
    // form belong to the path, including the root's lone slash.
    let mut normalized = url.to_string();
    while normalized.ends_with('/') {
        normalized.pop();
    }

    Ok(normalized)
}
