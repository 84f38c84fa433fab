//! Texnouz Tariff — CLI compiler
//!
//! Validates an import tariff described as JSON and compiles it into a DUIS
//! "Update Import Tariff (Primary Element)" request.
//!
//! ```sh
//! # Compile with default config (~/.config/texnouz-tariff/config.toml)
//! tariff-compile tariff.json
//!
//! # Stamp a specific request id
//! tariff-compile tariff.json --counter 1006 --target 00-db-12-34-56-78-90-a0
//!
//! # Validate only
//! tariff-compile tariff.json --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use validator::Validate;

use texnouz_tariff::config::AppConfig;
use texnouz_tariff::{
    build_update_import_tariff_primary_element, init_tracing, validate_tariff, AppError,
    RequestId,
};

/// Texnouz Tariff — DUIS import tariff compiler for smart meters.
#[derive(Parser, Debug)]
#[command(
    name = "tariff-compile",
    version,
    about = "Validate and compile smart-meter import tariffs into DUIS requests",
    long_about = "Texnouz Tariff — validates a tariff JSON file and compiles it \
                  into an Update Import Tariff (Primary Element) request, \
                  service reference variant 1.1.1.\n\n\
                  Default config: ~/.config/texnouz-tariff/config.toml"
)]
struct Cli {
    /// Tariff JSON file.
    input: PathBuf,

    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TARIFF_CONFIG")]
    config: Option<PathBuf>,

    /// Override the request counter.
    #[arg(long)]
    counter: Option<u64>,

    /// Override the originator EUI-64.
    #[arg(long)]
    originator: Option<String>,

    /// Override the target device EUI-64.
    #[arg(long)]
    target: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the tariff and exit without compiling.
    #[arg(long)]
    check: bool,

    /// Print compact JSON regardless of config.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(texnouz_tariff::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(counter) = cli.counter {
        info!("CLI override: counter = {}", counter);
        config.request.counter = counter;
    }
    if let Some(ref originator) = cli.originator {
        info!("CLI override: originator_id = {}", originator);
        config.request.originator_id = originator.clone();
    }
    if let Some(ref target) = cli.target {
        info!("CLI override: target_id = {}", target);
        config.request.target_id = target.clone();
    }
    if cli.compact {
        config.output.pretty = false;
    }

    if let Err(e) = run(&cli, &config) {
        error!("{}", e);
        return Err(e.into());
    }
    Ok(())
}

fn run(cli: &Cli, config: &AppConfig) -> Result<(), AppError> {
    // ── Validate ───────────────────────────────────────────────
    let content = std::fs::read_to_string(&cli.input)?;
    let input: serde_json::Value = serde_json::from_str(&content)?;
    let tariff = validate_tariff(&input)?;
    info!("Tariff {} is valid", cli.input.display());

    if cli.check {
        let standing_charge = tariff
            .pricing
            .standing_charge_value()
            .map(|v| v.normalize().to_string())
            .unwrap_or_else(|| "unrepresentable".to_string());
        println!("✅ Tariff is valid");
        println!("   Tariff file     : {}", cli.input.display());
        println!("   Mode            : {}", tariff.mode());
        println!("   Seasons         : {}", tariff.seasons.len());
        println!("   Week profiles   : {}", tariff.week_profiles.len());
        println!("   Day profiles    : {}", tariff.day_profiles.len());
        println!("   Special days    : {}", tariff.special_days.len());
        println!("   Standing charge : {}", standing_charge);
        return Ok(());
    }

    // ── Compile ────────────────────────────────────────────────
    let request_id = RequestId::new(
        config.request.counter,
        config.request.originator_id.clone(),
        config.request.target_id.clone(),
    );
    request_id.validate()?;

    let request = build_update_import_tariff_primary_element(&tariff, request_id)?;
    let output = if config.output.pretty {
        serde_json::to_string_pretty(&request)?
    } else {
        serde_json::to_string(&request)?
    };
    println!("{}", output);
    Ok(())
}
