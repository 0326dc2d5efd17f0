use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tally_core::TIMESTAMP_FORMAT;
use tally_finance::DEFAULT_EXCLUDED_CATEGORIES;
use tally_ingest::{ColumnMap, StatementLayout};

use crate::state::{default_config_path, ensure_tally_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub statement: StatementSection,
    pub totals: TotalsSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalarySection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementSection {
    /// Statement export to read when `--csv` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub delimiter: String,
    pub timestamp_format: String,
    pub columns: ColumnMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalsSection {
    /// Categories left out of the spending total
    pub excluded_categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySection {
    pub category: String,
    pub description: String,
}

impl Default for StatementSection {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: ";".to_string(),
            timestamp_format: TIMESTAMP_FORMAT.to_string(),
            columns: ColumnMap::default(),
        }
    }
}

impl Default for TotalsSection {
    fn default() -> Self {
        Self {
            excluded_categories: DEFAULT_EXCLUDED_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl StatementSection {
    pub fn layout(&self) -> Result<StatementLayout> {
        let delimiter = match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => bail!(
                "statement.delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ),
        };

        Ok(StatementLayout::default()
            .with_delimiter(delimiter)
            .with_timestamp_format(self.timestamp_format.clone())
            .with_columns(self.columns.clone()))
    }
}

impl TotalsSection {
    pub fn exclusions(&self) -> BTreeSet<String> {
        self.excluded_categories.iter().cloned().collect()
    }
}

/// Load the config. An explicit path must exist; the default one may be absent.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(explicit: Option<&Path>) -> Result<()> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => ensure_tally_home()?.join("config.toml"),
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
