//! Continuation link encoding
//!
//! Shared between provider and walker: the provider builds the next-page URL
//! and wraps it in a `Link` header value; the walker parses the header back
//! into a URL and extracts the cursor for its loop guard.

use crate::error::Result;
use url::Url;

/// Build the URL for the page after the one being served: same resource
/// path, `n` unchanged, `last` = final item included in the current page.
pub fn next_page_url(host: &str, path: &str, n: usize, last: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("http://{host}"))?;
    url.set_path(path);
    url.query_pairs_mut()
        .append_pair("n", &n.to_string())
        .append_pair("last", last);
    Ok(url)
}

/// Format a `Link` header value advertising the next page.
pub fn format_link_header(next_url: &Url) -> String {
    format!("<{next_url}>; title=\"next page\"; rel=\"next\"; type=\"application/json\"")
}

/// Parse a `Link` header (RFC 5988) and extract the URL for the given rel.
pub fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    // Link header format: <url>; rel="next", <url>; rel="prev"
    for part in header.split(',') {
        let part = part.trim();
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                let rel_value = stripped.trim_matches('"').trim_matches('\'');
                rel = Some(rel_value);
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            if r == target_rel {
                return Some(u.to_string());
            }
        }
    }

    None
}

/// Extract the `last` cursor from a continuation URL.
pub fn cursor_of(link: &str) -> Result<Option<String>> {
    let url = Url::parse(link)?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == "last")
        .map(|(_, value)| value.into_owned()))
}
