//! Catalog service — CLI server
//!
//! ```sh
//! # Run with default config (~/.config/catalog-service/config.toml)
//! catalog-service
//!
//! # Custom config path
//! catalog-service --config /etc/catalog-service/config.toml
//!
//! # Override the port
//! catalog-service --api-port 9090
//!
//! # Write a default config file, or validate one without starting
//! catalog-service --init
//! catalog-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use catalog::config::{AppConfig, StorageDriver};
use catalog::server::{init_tracing, ServerHandle, ServerOptions};

/// Products and tasks REST service.
#[derive(Parser, Debug)]
#[command(
    name = "catalog-service",
    version,
    about = "REST service for products and tasks",
    long_about = "Catalog service: CRUD over products and tasks with name search, \
                  category and stock filters, and task completion.\n\n\
                  Default config: ~/.config/catalog-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    init: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = catalog::resolve_config_path(cli.config);

    if cli.init {
        if config_path.exists() {
            eprintln!("Refusing to overwrite {}", config_path.display());
            std::process::exit(1);
        }
        AppConfig::default().save(&config_path)?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    // ── Load configuration ─────────────────────────────────────
    let loaded = if config_path.exists() {
        AppConfig::load(&config_path).map(Some)
    } else {
        Ok(None)
    };
    if let (Err(e), true) = (&loaded, cli.check) {
        eprintln!("❌ Invalid configuration in {}: {}", config_path.display(), e);
        std::process::exit(1);
    }
    let mut config = match &loaded {
        Ok(Some(cfg)) => cfg.clone(),
        _ => AppConfig::default(),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config);
    match loaded {
        Ok(Some(_)) => info!("Configuration loaded from {}", config_path.display()),
        Ok(None) => info!(
            "No config at {}, using defaults (run with --init to create one)",
            config_path.display()
        ),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }
    if let Some(port) = cli.api_port {
        info!("CLI override: api_port = {}", port);
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    config.validate()?;

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        let storage = match config.database.driver {
            StorageDriver::Sqlite => config.database.connection_url(),
            StorageDriver::Memory => "in-memory".to_string(),
        };
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}:{}", config.server.api_host, config.server.api_port);
        println!("   Storage     : {}", storage);
        println!("   Log level   : {}", config.logging.level);
        println!("   CORS        : {}", config.cors.allowed_origins.join(", "));
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
