use once_cell::sync::Lazy;
use regex::Regex;

/// Optional drive prefix (`C:`), a mandatory leading slash, at most one trailing slash.
static PATH_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[A-Z:]:)?/(.*?)/?$").expect("path pattern must compile"));

/// What a reference token points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRef<'a> {
    /// Token contains a `/`
    Path(&'a str),
    Symbol(&'a str),
}

impl<'a> TokenRef<'a> {
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        if token.contains('/') {
            Self::Path(token)
        } else {
            Self::Symbol(token)
        }
    }
}

/// Path lookup key for `token`, or `None` when it is not shaped like a path.
///
/// `C:/Home/` and `/home` both normalize to `/home`.
#[must_use]
pub fn normalize_path(token: &str) -> Option<String> {
    let caps = PATH_SHAPE.captures(token)?;
    let rest = caps.get(1).map_or("", |m| m.as_str());
    Some(format!("/{}", rest.to_lowercase()))
}

/// Symbol lookup key for `token`
#[must_use]
pub fn normalize_symbol(token: &str) -> String {
    token.to_lowercase()
}
