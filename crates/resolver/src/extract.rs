use once_cell::sync::Lazy;
use regex::Regex;

/// `%%` at the start of the text or after whitespace, one optional space, then the token.
static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)%% ?([\w:/.]+)").expect("reference pattern must compile")
});

/// Candidate reference tokens in `text`, left to right.
///
/// Case is preserved and duplicates are kept.
pub fn extract_tokens(text: &str) -> impl Iterator<Item = &str> + '_ {
    REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}
