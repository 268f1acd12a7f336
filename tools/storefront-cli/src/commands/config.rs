//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let pricing = &ctx.config.pricing;
    ctx.output.info("[pricing]");
    ctx.output.kv(
        "free_shipping_threshold",
        &pricing.free_shipping_threshold.display(),
    );
    ctx.output.kv("shipping_fee", &pricing.shipping_fee.display());
    ctx.output
        .kv("tax_rate_percent", &format!("{}%", pricing.tax_rate.as_percent()));

    let shop = &ctx.config.shop;
    ctx.output.info("[shop]");
    ctx.output.kv("price_ceiling", &shop.price_ceiling.display());
    ctx.output
        .kv("brand_facet_limit", &shop.brand_facet_limit.to_string());

    ctx.output.info("[catalog]");
    match &ctx.config.catalog.path {
        Some(path) => ctx.output.kv("path", &path.display().to_string()),
        None => ctx.output.kv("path", "(demo catalog)"),
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    tracing::info!(path = %config_path.display(), "config file written");

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
