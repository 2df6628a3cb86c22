//! Reservation Desk — terminal front-end
//!
//! ```sh
//! # Run with default config (~/.config/reservation-desk/config.toml)
//! reservation-desk
//!
//! # Custom config path
//! reservation-desk --config ./desk.toml
//!
//! # Show the resolved configuration without starting
//! reservation-desk --check
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use reservation_desk::{init_tracing, AppConfig, Console, Session, CONFIG_ENV_VAR};

/// Book tables at a fixed set of restaurants from the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "reservation-desk",
    version,
    about = "Single-session restaurant reservation desk",
    long_about = "Pick a restaurant, book a table, list bookings and cancel by email.\n\
                  Bookings are kept in memory and discarded on exit.\n\n\
                  Default config: ~/.config/reservation-desk/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print the resolved configuration and exit.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(reservation_desk::default_config_path);

    let (mut config, load_error) = match AppConfig::load_or_default(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config.logging);
    match &load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            return Err(e.into());
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        println!("   Restaurants :");
        for restaurant in &config.restaurants {
            println!("     - {} ({})", restaurant.name, restaurant.image);
        }
        return Ok(());
    }

    // ── Run the desk ───────────────────────────────────────────
    let session = Session::new(config.catalog());
    info!(restaurants = session.catalog().len(), "session started");

    let stdin = io::stdin();
    let mut console = Console::new(session, stdin.lock(), io::stdout());
    console.run()?;

    info!(
        reservations = console.session().reservations().len(),
        "session ended, reservations discarded"
    );
    Ok(())
}
