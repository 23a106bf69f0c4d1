//! Configuration management commands.

use std::path::PathBuf;

use anyhow::{bail, Result};
use vitality_commerce::search::SortKey;
use vitality_commerce::Currency;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, LogFormat};
use crate::context::{find_config_file, Context};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Catalog section
    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in)"),
    );
    ctx.output.kv("currency", ctx.config.catalog.currency.code());

    // Search section
    let search = &ctx.config.search;
    ctx.output.info("");
    ctx.output.info("[search]");
    ctx.output.kv("default_sort", &search.default_sort);
    ctx.output.kv("price_min", &format!("{:.2}", search.price_min));
    ctx.output.kv("price_max", &format!("{:.2}", search.price_max));
    ctx.output.kv("featured_limit", &search.featured_limit.to_string());
    ctx.output.kv("bestseller_limit", &search.bestseller_limit.to_string());

    // Logging section
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &ctx.config.logging.format.to_string());

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        println!(r#"{{"key": "{}", "value": {}}}"#, key, value);
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = ctx
        .config_path
        .clone()
        .or_else(|| find_config_file(&ctx.cwd))
    else {
        bail!("No config file found. Run `vitality config init` to create one.");
    };
    let config_path = config_path.to_string_lossy().to_string();

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path: PathBuf = ctx.cwd.join("vitality.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect configuration errors and warnings.
fn check_config(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let search = &config.search;

    if search.default_sort.parse::<SortKey>().is_err() {
        errors.push(format!(
            "search.default_sort '{}' is not one of featured, price-low, price-high, name",
            search.default_sort
        ));
    }

    match search.price_range() {
        Ok(range) => {
            if let Err(e) = range.validate() {
                errors.push(format!("search price bounds: {}", e));
            }
        }
        Err(e) => errors.push(format!("search price bounds: {}", e)),
    }

    if search.featured_limit == 0 {
        warnings.push("search.featured_limit is 0, featured lists will be empty".to_string());
    }
    if search.bestseller_limit == 0 {
        warnings.push("search.bestseller_limit is 0, bestseller lists will be empty".to_string());
    }

    if let Some(path) = &config.catalog.path {
        if !path.ends_with(".json") {
            warnings.push(format!("catalog.path '{}' is not a .json file", path));
        }
    }

    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".to_string());
    }

    (errors, warnings)
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["catalog", "path"] => Ok(config
            .catalog
            .path
            .as_ref()
            .map(|p| format!("\"{}\"", p))
            .unwrap_or_else(|| "null".to_string())),
        ["catalog", "currency"] => Ok(format!("\"{}\"", config.catalog.currency.code())),
        ["search", "default_sort"] => Ok(format!("\"{}\"", config.search.default_sort)),
        ["search", "price_min"] => Ok(config.search.price_min.to_string()),
        ["search", "price_max"] => Ok(config.search.price_max.to_string()),
        ["search", "featured_limit"] => Ok(config.search.featured_limit.to_string()),
        ["search", "bestseller_limit"] => Ok(config.search.bestseller_limit.to_string()),
        ["logging", "level"] => Ok(format!("\"{}\"", config.logging.level)),
        ["logging", "format"] => Ok(format!("\"{}\"", config.logging.format)),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["catalog", "path"] => config.catalog.path = Some(value.to_string()),
        ["catalog", "currency"] => {
            config.catalog.currency = match Currency::from_code(value) {
                Some(currency) => currency,
                None => bail!("Unknown currency: {}", value),
            }
        }
        ["search", "default_sort"] => {
            value.parse::<SortKey>()?;
            config.search.default_sort = value.to_string();
        }
        ["search", "price_min"] => config.search.price_min = value.parse()?,
        ["search", "price_max"] => config.search.price_max = value.parse()?,
        ["search", "featured_limit"] => config.search.featured_limit = value.parse()?,
        ["search", "bestseller_limit"] => config.search.bestseller_limit = value.parse()?,
        ["logging", "level"] => config.logging.level = value.to_string(),
        ["logging", "format"] => config.logging.format = value.parse::<LogFormat>()?,
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}
