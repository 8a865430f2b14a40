//! Starship repair bay service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use repair_bay::api::{create_router, AppState};
use repair_bay::config::Config;
use repair_bay::metrics;
use repair_bay::phase::{estimate_volumes, Pressure};
use repair_bay::status::{LastDamagedSystem, StatusPicker};
use repair_bay::utils::shutdown_signal;

/// Starship repair bay service.
#[derive(Parser, Debug)]
#[command(name = "repair-bay")]
#[command(about = "Damaged-system status, repair codes and phase-change lookup over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Pick a damaged system once and print it.
    PickStatus {
        /// Seed for a reproducible pick.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Estimate saturated volumes at a pressure.
    Estimate {
        /// Pressure in MPa.
        #[arg(long, allow_hyphen_values = true)]
        pressure: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    config.verbose |= args.verbose;

    init_logging(&config);

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::PickStatus { seed }) => cmd_pick_status(seed.or(config.status_seed)).await,
        Some(Command::Estimate { pressure }) => cmd_estimate(pressure),
        Some(Command::Serve { port }) => cmd_serve(config, port.or(args.port)).await,
        None => cmd_serve(config, args.port).await,
    }
}

fn init_logging(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("repair_bay=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("REPAIR BAY - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);
    match config.status_seed {
        Some(seed) => println!("  Status Seed: {}", seed),
        None => println!("  Status Seed: none (random)"),
    }
    println!("  Log Level: {}", config.rust_log);
    println!("  JSON Logs: {}", if config.log_json { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Pick a damaged system once.
async fn cmd_pick_status(seed: Option<u64>) -> anyhow::Result<()> {
    let picker = StatusPicker::from_seed(seed, LastDamagedSystem::new());
    let status = picker.pick().await;
    println!("{}", serde_json::to_string(&status)?);
    Ok(())
}

/// Estimate saturated volumes at a pressure.
fn cmd_estimate(pressure: f64) -> anyhow::Result<()> {
    let volumes = Pressure::new(pressure).and_then(estimate_volumes)?;
    println!("{}", serde_json::to_string_pretty(&volumes)?);
    Ok(())
}

/// Run the HTTP server.
async fn cmd_serve(mut config: Config, port_override: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let prometheus = metrics::install_prometheus()?;

    let state = AppState::from_seed(config.status_seed).with_prometheus(prometheus);
    if config.status_seed.is_some() {
        info!("Status picks are seeded");
    }

    let addr = config.bind_addr().map_err(|e| anyhow::anyhow!(e))?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
