use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{debug, error};

use logistics_store::cli::Cli;
use logistics_store::commands::run;
use logistics_store::config::AppConfig;
use logistics_store::AppState;

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }
    if cli.no_seed {
        config.seed = false;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Configurar logging (stderr, stdout queda para el JSON)
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    debug!("⚙️ Configuración: {:?}", config);

    let state = AppState::open(&config)?;
    match run(&state, cli.command) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            error!("❌ {} ({})", e, e.code());
            Err(e.into())
        }
    }
}
