//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vitality_commerce::search::{PriceRange, SortKey};
use vitality_commerce::Currency;

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["vitality.toml", ".vitality.toml", "vitality.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing defaults.
    #[serde(default)]
    pub search: SearchConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Currency the catalog must be priced in.
    #[serde(default)]
    pub currency: Currency,
}

/// Defaults applied to `products` and `collections`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Sort key when `--sort` is not given.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Lower price bound when `--min` is not given.
    #[serde(default)]
    pub price_min: f64,

    /// Upper price bound when `--max` is not given.
    #[serde(default = "default_price_max")]
    pub price_max: f64,

    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,

    #[serde(default = "default_bestseller_limit")]
    pub bestseller_limit: usize,
}

fn default_sort() -> String {
    SortKey::Featured.as_str().to_string()
}

fn default_price_max() -> f64 {
    10.0
}

fn default_featured_limit() -> usize {
    4
}

fn default_bestseller_limit() -> usize {
    6
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            price_min: 0.0,
            price_max: default_price_max(),
            featured_limit: default_featured_limit(),
            bestseller_limit: default_bestseller_limit(),
        }
    }
}

impl SearchConfig {
    /// The configured default sort key.
    pub fn sort_key(&self) -> Result<SortKey> {
        self.default_sort
            .parse()
            .with_context(|| format!("search.default_sort is invalid: {}", self.default_sort))
    }

    /// The configured default price range.
    pub fn price_range(&self) -> Result<PriceRange> {
        Ok(PriceRange::from_decimal(self.price_min, self.price_max)?)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `vitality_commerce=debug`.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Human => f.write_str("human"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!("Unknown log format: {} (expected human or json)", s),
        }
    }
}

/// Generate a default vitality.toml config file.
pub fn generate_default_config() -> String {
    r#"# Vitality Drinks CLI configuration

[catalog]
# path = "catalog.json"
currency = "USD"

[search]
default_sort = "featured"
price_min = 0.0
price_max = 10.0
featured_limit = 4
bestseller_limit = 6

[logging]
level = "info"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.catalog.currency, Currency::USD);
        assert_eq!(config.search.sort_key().unwrap(), SortKey::Featured);
        assert_eq!(config.search.price_range().unwrap(), PriceRange::new(0, 1000));
        assert_eq!(config.search.featured_limit, 4);
        assert_eq!(config.search.bestseller_limit, 6);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_missing_sections_default() {
        let config: CliConfig = toml::from_str("[search]\ndefault_sort = \"name\"\n").unwrap();
        assert_eq!(config.search.sort_key().unwrap(), SortKey::Name);
        assert_eq!(config.search.price_max, 10.0);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_json_config() {
        let config: CliConfig =
            serde_json::from_str(r#"{"logging": {"level": "debug", "format": "json"}}"#).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.search.featured_limit, 4);
    }

    #[test]
    fn test_bad_sort_key() {
        let mut config = CliConfig::default();
        config.search.default_sort = "relevance".to_string();
        assert!(config.search.sort_key().is_err());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
