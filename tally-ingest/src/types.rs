use serde::{Deserialize, Serialize};
use tally_core::TIMESTAMP_FORMAT;

/// Header names of the four columns the parser reads. Other columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub timestamp: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            timestamp: "Operation date".to_string(),
            amount: "Operation amount".to_string(),
            category: "Category".to_string(),
            description: "Description".to_string(),
        }
    }
}

/// How a statement export is laid out on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLayout {
    /// Single-byte field delimiter
    pub delimiter: u8,
    /// chrono format of the operation timestamp column
    pub timestamp_format: String,
    pub columns: ColumnMap,
}

impl Default for StatementLayout {
    fn default() -> Self {
        Self {
            delimiter: b';',
            timestamp_format: TIMESTAMP_FORMAT.to_string(),
            columns: ColumnMap::default(),
        }
    }
}

impl StatementLayout {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}
