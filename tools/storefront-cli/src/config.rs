//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::cart::PricingPolicy;
use storefront_commerce::money::Money;
use storefront_commerce::search::PriceRange;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shipping and tax rules.
    #[serde(default)]
    pub pricing: PricingPolicy,

    /// Shop listing defaults.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config
            .pricing
            .validate()
            .with_context(|| format!("Invalid [pricing] in {}", path.display()))?;

        Ok(config)
    }

    /// Find the nearest config file from `start` upwards.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Shop listing defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Upper end of the price slider, and of the default price range.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: Money,

    /// Number of brands offered as filter options.
    #[serde(default = "default_brand_facet_limit")]
    pub brand_facet_limit: usize,
}

fn default_price_ceiling() -> Money {
    Money::from_dollars(500)
}

fn default_brand_facet_limit() -> usize {
    8
}

impl ShopConfig {
    /// The price range a fresh shop filter starts with.
    pub fn price_bounds(&self) -> PriceRange {
        PriceRange::up_to(self.price_ceiling)
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            price_ceiling: default_price_ceiling(),
            brand_facet_limit: default_brand_facet_limit(),
        }
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file; the demo catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[pricing]
# Orders at or above this subtotal ship free.
free_shipping_threshold = 100.0
shipping_fee = 10.0
tax_rate_percent = 8.0

[shop]
price_ceiling = 500.0
brand_facet_limit = 8

[catalog]
# JSON array of products; the demo catalog is used when unset.
# path = "catalog.json"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [pricing]
            shipping_fee = 4.99
            "#,
        )
        .unwrap();
        assert_eq!(config.pricing.shipping_fee.cents(), 499);
        assert_eq!(config.pricing.free_shipping_threshold.cents(), 10_000);
        assert_eq!(config.shop.brand_facet_limit, 8);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_discover_walks_up() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("storefront.toml"), generate_default_config()).unwrap();

        assert_eq!(
            CliConfig::discover(&nested),
            Some(dir.path().join("storefront.toml"))
        );
    }
}
