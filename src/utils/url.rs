// src/utils/url.rs

//! URL manipulation utilities.

use regex::Captures;
use url::Url;

use crate::utils::patterns::URL_ATTRIBUTE_RES;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// True if the string parses as an absolute URI with a scheme.
pub fn is_uri(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Compare two URLs ignoring a single trailing slash.
pub fn url_equal(a: &str, b: &str) -> bool {
    let a = a.strip_suffix('/').unwrap_or(a);
    let b = b.strip_suffix('/').unwrap_or(b);
    a == b
}

/// The URL that relative paths in a page resolve against: the `<base href>`
/// resolved against the page URL, or the page URL itself.
fn effective_base(source_url: &str, base_href: Option<&str>) -> Option<Url> {
    let source = Url::parse(source_url).ok()?;
    match base_href.filter(|href| !href.is_empty()) {
        Some(href) => source.join(href).ok(),
        None => Some(source),
    }
}

/// Rewrite relative `href`/`src`/`poster` values in an HTML fragment to
/// absolute URLs.
///
/// Only attribute values change; quoting style and all other markup are
/// passed through byte for byte. Values that already carry a scheme are
/// left alone.
///
/// # Examples
/// ```
/// use mf2util::utils::url::convert_relative_paths_to_absolute;
///
/// assert_eq!(
///     convert_relative_paths_to_absolute("https://site.com", None, r#"<a href="x.html">x</a>"#),
///     r#"<a href="https://site.com/x.html">x</a>"#
/// );
/// ```
pub fn convert_relative_paths_to_absolute(
    source_url: &str,
    base_href: Option<&str>,
    html: &str,
) -> String {
    if html.is_empty() {
        return html.to_string();
    }
    let Some(base) = effective_base(source_url, base_href) else {
        log::debug!("Cannot resolve paths against source URL {source_url:?}");
        return html.to_string();
    };

    let mut html = html.to_string();
    for pattern in URL_ATTRIBUTE_RES.iter() {
        let rewritten = pattern.replace_all(&html, |caps: &Captures| {
            let prefix = &caps["prefix"];
            let (quote, value) = match caps.name("dq") {
                Some(value) => ('"', value.as_str()),
                None => ('\'', caps.name("sq").map_or("", |m| m.as_str())),
            };
            let value = if is_uri(value) {
                value.to_string()
            } else {
                resolve_url(&base, value)
            };
            format!("{prefix}{quote}{value}{quote}")
        });
        html = rewritten.into_owned();
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://example.com/path/").unwrap();
        assert_eq!(
            resolve_url(&base, "page.html"),
            "https://example.com/path/page.html"
        );
        assert_eq!(
            resolve_url(&base, "/root.html"),
            "https://example.com/root.html"
        );
        assert_eq!(
            resolve_url(&base, "https://other.com/x"),
            "https://other.com/x"
        );
    }

    #[test]
    fn test_url_equal_ignores_trailing_slash() {
        assert!(url_equal("https://a.example/", "https://a.example"));
        assert!(url_equal("https://a.example", "https://a.example"));
        assert!(!url_equal("https://a.example/x", "https://a.example"));
    }

    #[test]
    fn test_is_uri() {
        assert!(is_uri("https://example.com/like"));
        assert!(is_uri("mailto:someone@example.com"));
        assert!(!is_uri("not a url"));
        assert!(!is_uri("/relative/path"));
    }

    #[test]
    fn test_convert_anchors_preserves_other_markup() {
        let html = "this is a title\nhello there.\n\n<a href=\"greetings.html\">stuff</a>\n\nanother hello\n\n<a href=\"blah.html\">stuff</a>";
        let converted = convert_relative_paths_to_absolute("https://site.com", None, html);
        assert_eq!(
            converted,
            "this is a title\nhello there.\n\n<a href=\"https://site.com/greetings.html\">stuff</a>\n\nanother hello\n\n<a href=\"https://site.com/blah.html\">stuff</a>"
        );
    }

    #[test]
    fn test_convert_with_base_href() {
        let html = r#"<img alt="x" src='pic.png'>"#;
        let converted =
            convert_relative_paths_to_absolute("https://site.com/a/b.html", Some("/media/"), html);
        assert_eq!(converted, r#"<img alt="x" src='https://site.com/media/pic.png'>"#);
    }

    #[test]
    fn test_convert_video_src_and_poster() {
        let html = r#"<video poster="p.jpg" src="v.mp4"></video>"#;
        let converted = convert_relative_paths_to_absolute("https://site.com/", None, html);
        assert_eq!(
            converted,
            r#"<video poster="https://site.com/p.jpg" src="https://site.com/v.mp4"></video>"#
        );
    }

    #[test]
    fn test_convert_leaves_absolute_and_unrelated_attributes() {
        let html = r#"<a href="https://other.org/x">x</a><abbr title="t.html">t</abbr><a data-href="y.html">y</a>"#;
        let converted = convert_relative_paths_to_absolute("https://site.com", None, html);
        assert_eq!(converted, html);
    }
}
