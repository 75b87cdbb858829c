use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{DatasetError, Result};
use crate::types::{Symbol, SymbolRecord};

/// On-disk layout of the reference data file
#[derive(Debug, Deserialize)]
struct RawDataset {
    symbols: Vec<SymbolRecord>,
    paths: Vec<String>,
}

/// Symbol and path tables, keyed by lowercased name.
///
/// Built once at startup and never mutated afterwards; share it behind an
/// `Arc` between message handlers.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataset {
    symbols: HashMap<String, Symbol>,
    paths: HashMap<String, String>,
}

impl ReferenceDataset {
    /// Load the dataset from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| DatasetError::io(path, err))?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        if dataset.is_empty() {
            log::warn!("Reference data {} has no symbols or paths", path.display());
        }
        log::info!(
            "Loaded {} symbols and {} paths from {}",
            dataset.symbol_count(),
            dataset.path_count(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawDataset = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDataset) -> Result<Self> {
        let symbols = raw
            .symbols
            .into_iter()
            .map(Symbol::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_records(symbols, raw.paths))
    }

    /// Build the tables from already-validated records.
    ///
    /// Later entries overwrite earlier ones that share a lowercased key.
    pub fn from_records(
        symbols: impl IntoIterator<Item = Symbol>,
        paths: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut dataset = Self::default();

        for symbol in symbols {
            if let Some(previous) = dataset.symbols.insert(symbol.key(), symbol) {
                log::debug!("Symbol {:?} overwritten by a later entry", previous.symbol);
            }
        }

        for path in paths {
            if let Some(previous) = dataset.paths.insert(path.to_lowercase(), path) {
                log::debug!("Path {previous:?} overwritten by a later entry");
            }
        }

        dataset
    }

    /// Look up a symbol by its lowercased key
    #[must_use]
    pub fn symbol(&self, key: &str) -> Option<&Symbol> {
        self.symbols.get(key)
    }

    /// Look up a path by its lowercased key, returning the original casing
    #[must_use]
    pub fn path(&self, key: &str) -> Option<&str> {
        self.paths.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.paths.is_empty()
    }
}
