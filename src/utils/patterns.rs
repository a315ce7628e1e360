//! Cached regex patterns.
//!
//! Compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

/// `YYYY-M-D`, optional `[T ]H:MM[:SS[.fff]]`, optional zone, optional
/// trailing three-character token (e.g. a weekday abbreviation).
pub static DATETIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<year>\d{4,})-(?P<month>\d{1,2})-(?P<day>\d{1,2})",
        r"(?:(?:T| )(?P<hour>\d{1,2}):(?P<minute>\d{2})",
        r"(?::(?P<second>\d{2})(?:.(?P<fraction>\d+))?)?",
        r" ?(?:(?P<tzz>Z)|(?P<tzsign>[+-])(?P<tzhour>\d{1,2}):?(?P<tzminute>\d{2}))?)?",
        r"(?: .{3})?$",
    ))
    .expect("valid datetime pattern")
});

/// Characters dropped when comparing a name against content.
pub static TITLE_PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[~`!@#$%^&*(){}\[\];:"'<,.>?/\\|\-_+=]"#).expect("valid punctuation pattern")
});

pub static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Tag name to the path-bearing attributes it carries.
pub const URL_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href"]),
    ("link", &["href"]),
    ("img", &["src"]),
    ("audio", &["src"]),
    ("video", &["src", "poster"]),
    ("source", &["src"]),
];

/// One pattern per (tag, attribute) pair, in `URL_ATTRIBUTES` order.
///
/// Groups: `prefix` is everything up to and including `=` and spacing,
/// then exactly one of `dq` / `sq` holds the quoted value.
pub static URL_ATTRIBUTE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    URL_ATTRIBUTES
        .iter()
        .flat_map(|(tag, attributes)| {
            attributes.iter().map(move |attribute| {
                Regex::new(&format!(
                    r#"(?is)(?P<prefix><{tag}\s(?:[^>]*?\s)?{attribute}\s*=\s*)(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#
                ))
                .expect("valid url attribute pattern")
            })
        })
        .collect()
});
