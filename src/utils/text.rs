//! Text comparison helpers.

use unicode_normalization::UnicodeNormalization;

use crate::utils::patterns::{TITLE_PUNCTUATION_RE, WHITESPACE_RE};

/// Compatibility-decompose, lowercase, and drop punctuation and whitespace.
fn normalize(text: &str) -> String {
    let decomposed: String = text.nfkd().collect::<String>().to_lowercase();
    let stripped = TITLE_PUNCTUATION_RE.replace_all(&decomposed, "");
    WHITESPACE_RE.replace_all(&stripped, "").into_owned()
}

/// Decide whether `name` is an explicit title rather than text generated
/// from `content`.
///
/// Parsers imply a `name` from the whole entry text when none is marked
/// up, so a name that merely contains the content is not a title. With no
/// content to compare against any name counts.
pub fn is_name_a_title(name: Option<&str>, content: Option<&str>) -> bool {
    let Some(content) = content.filter(|c| !c.is_empty()) else {
        return true;
    };
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return false;
    };
    !normalize(name).contains(&normalize(content))
}
