//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { path, force } => init_config(path.as_deref(), force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Search section
    let search = &ctx.config.search;
    ctx.output.info("");
    ctx.output.info("[search]");
    ctx.output.kv("result_cap", &search.result_cap.to_string());
    ctx.output.kv(
        "variants_per_combination",
        &search.variants_per_combination.to_string(),
    );
    ctx.output.kv("local_brands_only", &search.local_brands_only.to_string());

    // Profile section
    let profile = &ctx.config.profile;
    ctx.output.info("");
    ctx.output.info("[profile]");
    ctx.output.kv("user_id", &profile.user_id);
    match &profile.country {
        Some(country) => ctx.output.kv("country", country),
        None => ctx.output.kv("country", &format!("(detected: {})", ctx.country(None))),
    }

    // History section
    ctx.output.info("");
    ctx.output.info("[history]");
    ctx.output.kv("enabled", &ctx.config.history.enabled.to_string());
    ctx.output.kv("path", &ctx.history().path().display().to_string());

    // Logging section
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

async fn init_config(path: Option<&str>, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(path.unwrap_or(CONFIG_NAMES[0]));

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if config_path.extension().map_or(false, |e| e == "json") {
        CliConfig::default().save(&config_path.to_string_lossy())?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
