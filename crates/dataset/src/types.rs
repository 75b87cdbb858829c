use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// Where a symbol is defined
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Definition {
    /// Drive-qualified file path (e.g., "C:/Kernel/Debug.HC")
    pub file: String,

    /// Line within `file`
    pub line: u32,
}

/// One entry of the symbol table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Symbol {
    /// Display name, case preserved (e.g., "Dbg")
    pub symbol: String,

    /// Free-text kind (e.g., "Function", "Class", "Define")
    #[serde(rename = "type")]
    pub kind: String,

    /// Definition site; file and line always travel together
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Definition>,
}

impl Symbol {
    pub fn new(
        symbol: impl Into<String>,
        kind: impl Into<String>,
        definition: Option<Definition>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            kind: kind.into(),
            definition,
        }
    }

    /// Lookup key: the lowercased display name
    #[must_use]
    pub fn key(&self) -> String {
        self.symbol.to_lowercase()
    }
}

/// Symbol as it appears in the data file, before the definition fields are paired up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub symbol: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl TryFrom<SymbolRecord> for Symbol {
    type Error = DatasetError;

    fn try_from(record: SymbolRecord) -> Result<Self, Self::Error> {
        let definition = match (record.file, record.line) {
            (Some(file), Some(line)) => Some(Definition { file, line }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(DatasetError::IncompleteDefinition {
                    symbol: record.symbol,
                    present: "file",
                    missing: "line",
                })
            }
            (None, Some(_)) => {
                return Err(DatasetError::IncompleteDefinition {
                    symbol: record.symbol,
                    present: "line",
                    missing: "file",
                })
            }
        };

        Ok(Self {
            symbol: record.symbol,
            kind: record.kind,
            definition,
        })
    }
}
