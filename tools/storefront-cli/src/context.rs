//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::catalog::ProductCatalog;
use storefront_commerce::fixtures::demo_catalog;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Products on offer.
    pub catalog: ProductCatalog,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load config and catalog.
    ///
    /// An explicit `--config` must exist; otherwise the nearest config file is
    /// used, falling back to defaults. `--catalog` overrides the config's
    /// catalog path.
    pub fn load(
        config_path: Option<&str>,
        catalog_path: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, Path::new(path))),
            None => CliConfig::discover(&cwd),
        };
        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        tracing::debug!(config = ?config_path, "configuration loaded");

        // Catalog paths in a config file are relative to that file.
        let config_dir = config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&cwd);
        let catalog_file = match catalog_path {
            Some(path) => Some(resolve(&cwd, Path::new(path))),
            None => config
                .catalog
                .path
                .as_deref()
                .map(|path| resolve(config_dir, path)),
        };
        let catalog = match catalog_file {
            Some(path) => load_catalog(&path)?,
            None => demo_catalog(),
        };

        Ok(Self {
            config,
            config_path,
            catalog,
            output,
            cwd,
        })
    }
}

fn load_catalog(path: &Path) -> Result<ProductCatalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let catalog = ProductCatalog::from_json(&json)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
    tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Resolve a path relative to the working directory.
fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
