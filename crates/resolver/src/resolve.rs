use ttd_dataset::{ReferenceDataset, Symbol};

use crate::classify::{normalize_path, normalize_symbol, TokenRef};

/// Outcome of looking up one token.
///
/// Hits borrow from the dataset; misses keep the token as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    SymbolFound(&'a Symbol),
    SymbolNotFound(String),
    PathFound(&'a str),
    PathNotFound(String),
    /// Path-like token that does not start with `/` (after an optional drive prefix)
    InvalidPath(String),
}

impl Resolution<'_> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::SymbolFound(_) | Self::PathFound(_))
    }
}

/// Classify `token` and look it up in `dataset`.
pub fn resolve<'a>(token: &str, dataset: &'a ReferenceDataset) -> Resolution<'a> {
    let resolution = match TokenRef::classify(token) {
        TokenRef::Path(raw) => match normalize_path(raw) {
            None => Resolution::InvalidPath(raw.to_string()),
            Some(key) => match dataset.path(&key) {
                Some(path) => Resolution::PathFound(path),
                None => Resolution::PathNotFound(raw.to_string()),
            },
        },
        TokenRef::Symbol(raw) => match dataset.symbol(&normalize_symbol(raw)) {
            Some(symbol) => Resolution::SymbolFound(symbol),
            None => Resolution::SymbolNotFound(raw.to_string()),
        },
    };
    log::trace!("Resolved {token:?} -> {resolution:?}");
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ttd_dataset::Definition;

    fn dataset() -> ReferenceDataset {
        ReferenceDataset::from_records(
            vec![
                Symbol::new(
                    "Dbg",
                    "Function",
                    Some(Definition {
                        file: "C:/Kernel/Debug.HC".into(),
                        line: 42,
                    }),
                ),
                Symbol::new("U8", "Class", None),
            ],
            vec!["/Home/Readme.TXT".to_string(), "/Home".to_string()],
        )
    }

    #[test]
    fn symbol_hit_in_any_case() {
        let data = dataset();
        let expected = data.symbol("dbg").unwrap();
        for token in ["Dbg", "dbg", "DBG", "dBg"] {
            assert_eq!(resolve(token, &data), Resolution::SymbolFound(expected));
        }
    }

    #[test]
    fn symbol_miss_keeps_original_text() {
        let data = dataset();
        assert_eq!(
            resolve("NoSuchThing", &data),
            Resolution::SymbolNotFound("NoSuchThing".into())
        );
    }

    #[test]
    fn path_hit_returns_stored_casing() {
        let data = dataset();
        assert_eq!(
            resolve("/home/README.txt", &data),
            Resolution::PathFound("/Home/Readme.TXT")
        );
        assert_eq!(resolve("C:/Home/", &data), Resolution::PathFound("/Home"));
    }

    #[test]
    fn path_miss_and_invalid_path() {
        let data = dataset();
        assert_eq!(
            resolve("/bad", &data),
            Resolution::PathNotFound("/bad".into())
        );
        assert_eq!(
            resolve("Home/Readme.TXT", &data),
            Resolution::InvalidPath("Home/Readme.TXT".into())
        );
    }

    #[test]
    fn symbol_table_is_never_consulted_for_paths() {
        let data = ReferenceDataset::from_records(
            vec![Symbol::new("a/b", "Weird", None)],
            Vec::<String>::new(),
        );
        assert_eq!(resolve("a/b", &data), Resolution::InvalidPath("a/b".into()));
    }

    #[test]
    fn found_flag() {
        let data = dataset();
        assert!(resolve("u8", &data).is_found());
        assert!(!resolve("/nope", &data).is_found());
    }
}
