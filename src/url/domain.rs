use url::Url;

/// Extracts the host from a URL string
///
/// Returns the lowercase host, or `None` if the string does not parse as an
/// absolute URL or has no host component.
pub fn host_of(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
}

/// Returns true if `candidate` belongs to the crawl's starting domain
///
/// Membership is exact host equality: `sub.example.com` is NOT within
/// `example.com`. Scheme and port play no part in the comparison.
///
/// # Examples
///
/// ```
/// use linkmap::is_within_domain;
/// use url::Url;
///
/// let base = Url::parse("https://example.com").unwrap();
/// assert!(is_within_domain(&base, "https://example.com/x"));
/// assert!(!is_within_domain(&base, "https://sub.example.com"));
/// ```
pub fn is_within_domain(base: &Url, candidate: &str) -> bool {
    let Some(candidate_host) = host_of(candidate) else {
        return false;
    };

    match base.host_str() {
        Some(base_host) => base_host.eq_ignore_ascii_case(&candidate_host),
        None => false,
    }
}
