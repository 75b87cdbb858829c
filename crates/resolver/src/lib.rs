//! # TTD Resolver
//!
//! Turns chat text containing `%% token` references into embed fields.
//!
//! ## Pipeline
//!
//! ```text
//! message text
//!     │
//!     ├──> Extract   `%% token` runs, left to right, duplicates kept
//!     │
//!     ├──> Classify  contains '/' → path reference, otherwise symbol reference
//!     │
//!     ├──> Resolve   normalize, then look up in the ReferenceDataset
//!     │
//!     └──> Format    one EmbedField per token, in source order
//! ```
//!
//! Everything here is pure: the same text against the same dataset always
//! yields the same [`Reply`].
//!
//! ## Example
//!
//! ```rust
//! use ttd_dataset::{ReferenceDataset, Symbol};
//! use ttd_resolver::process_message;
//!
//! let dataset = ReferenceDataset::from_records(
//!     vec![Symbol::new("Beep", "Function", None)],
//!     Vec::<String>::new(),
//! );
//!
//! let reply = process_message("try %% beep", &dataset).expect("one token");
//! assert_eq!(reply.fields()[0].name, "Beep");
//! assert!(process_message("nothing to see", &dataset).is_none());
//! ```

mod classify;
mod extract;
mod format;
mod resolve;

pub use classify::{normalize_path, normalize_symbol, TokenRef};
pub use extract::extract_tokens;
pub use format::{file_type_label, EmbedField, Reply, DOCS_BASE_URL, ERROR_TITLE};
pub use resolve::{resolve, Resolution};

use ttd_dataset::ReferenceDataset;

/// Run the whole pipeline over one message.
///
/// Returns `None` when the text holds no `%%` reference, in which case the
/// caller must not reply at all.
pub fn process_message(text: &str, dataset: &ReferenceDataset) -> Option<Reply> {
    let mut tokens = extract_tokens(text).peekable();
    tokens.peek()?;

    let mut reply = Reply::new();
    let mut found = 0;
    for token in tokens {
        let resolution = resolve(token, dataset);
        if resolution.is_found() {
            found += 1;
        }
        reply.push(&resolution);
    }
    log::debug!("Resolved {found} of {} reference(s)", reply.len());
    Some(reply)
}
