use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shopgen_generate::GenerateOptions;
use thiserror::Error;

pub const DEFAULT_DB_PATH: &str = "data/analytics_demo.duckdb";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for one run. Every field has a default, so an empty file (or no
/// file at all) reproduces the standard demo database.
///
/// Dates are quoted strings in TOML, e.g. `date_start = "2024-01-01"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopgenConfig {
    pub db_path: PathBuf,
    /// Also export each table as `<csv_dir>/<table>.csv`.
    pub csv_dir: Option<PathBuf>,
    /// Write the summary metrics as JSON to this path.
    pub summary_json: Option<PathBuf>,
    pub generate: GenerateOptions,
}

impl Default for ShopgenConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            csv_dir: None,
            summary_json: None,
            generate: GenerateOptions::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<ShopgenConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: ShopgenConfig = toml::from_str("").expect("parse empty config");
        assert_eq!(config, ShopgenConfig::default());
        assert_eq!(config.generate.seed, 42);
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn partial_generate_table_keeps_other_defaults() {
        let config: ShopgenConfig = toml::from_str(
            r#"
db_path = "out/demo.duckdb"

[generate]
seed = 7
orders = 500
date_start = "2025-01-01"
"#,
        )
        .expect("parse config");

        assert_eq!(config.db_path, PathBuf::from("out/demo.duckdb"));
        assert_eq!(config.generate.seed, 7);
        assert_eq!(config.generate.orders, 500);
        assert_eq!(config.generate.customers, 2000);
        assert_eq!(
            config.generate.date_start,
            NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
        );
    }

    #[test]
    fn unreadable_file_reports_its_path() {
        let err = load_config(Path::new("/definitely/missing/shopgen.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/missing/shopgen.toml"));
    }
}
