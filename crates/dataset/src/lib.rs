//! # TTD Dataset
//!
//! Immutable lookup tables for the TempleOS reference bot.
//!
//! The dataset is built once from a JSON document with two top-level lists:
//!
//! ```text
//! {
//!   "symbols": [ { "symbol": "Dbg", "type": "Function", "file": "C:/Kernel/Debug.HC", "line": 42 }, ... ],
//!   "paths":   [ "/Home/Readme.TXT", ... ]
//! }
//! ```
//!
//! Both tables are keyed by the lowercased name, so lookups are
//! case-insensitive while the stored values keep their original casing.
//! Duplicate keys are resolved last-write-wins.
//!
//! ## Example
//!
//! ```rust
//! use ttd_dataset::ReferenceDataset;
//!
//! let dataset = ReferenceDataset::from_json_str(
//!     r#"{"symbols":[{"symbol":"Dbg","type":"Function"}],"paths":["/Home"]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(dataset.symbol("dbg").map(|s| s.symbol.as_str()), Some("Dbg"));
//! assert_eq!(dataset.path("/home"), Some("/Home"));
//! ```

mod dataset;
mod error;
mod types;

pub use dataset::ReferenceDataset;
pub use error::{DatasetError, Result};
pub use types::{Definition, Symbol, SymbolRecord};
