//! Argumentos de la CLI `logistics`

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logistics")]
#[command(about = "Drivers, routes and deliveries stored in a local data directory", long_about = None)]
pub struct Cli {
    /// Data directory (overrides LOGISTICS_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Do not load example data into missing collections
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Log level (overrides LOGISTICS_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<tracing::Level>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage drivers
    #[command(subcommand)]
    Drivers(DriverCommand),
    /// Manage routes
    #[command(subcommand)]
    Routes(RouteCommand),
    /// Manage deliveries and their status history
    #[command(subcommand)]
    Deliveries(DeliveryCommand),
    /// Show dashboard metrics
    Dashboard,
    /// Load example data into missing collections
    Seed,
}

#[derive(Subcommand, Debug)]
pub enum DriverCommand {
    List,
    Show { id: String },
    Add(DriverArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: DriverUpdateArgs,
    },
    Remove { id: String },
}

#[derive(Args, Debug)]
pub struct DriverArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub cpf: String,
    #[arg(long)]
    pub phone: String,
    /// active | inactive
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug)]
pub struct DriverUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub cpf: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum RouteCommand {
    List {
        /// Only routes assigned to this driver
        #[arg(long)]
        driver_id: Option<String>,
    },
    Show { id: String },
    Add(RouteArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: RouteUpdateArgs,
    },
    Remove { id: String },
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    #[arg(long)]
    pub origin: String,
    #[arg(long)]
    pub destination: String,
    #[arg(long, default_value = "")]
    pub driver_id: String,
    #[arg(long)]
    pub client_name: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub value: f64,
    #[arg(long, default_value = "")]
    pub observations: String,
    /// active | completed | cancelled
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug)]
pub struct RouteUpdateArgs {
    #[arg(long)]
    pub origin: Option<String>,
    #[arg(long)]
    pub destination: Option<String>,
    #[arg(long)]
    pub driver_id: Option<String>,
    #[arg(long)]
    pub client_name: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub value: Option<f64>,
    #[arg(long)]
    pub observations: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DeliveryCommand {
    List {
        /// Only deliveries in this status
        #[arg(long)]
        status: Option<String>,
    },
    Show { id: String },
    Add(DeliveryArgs),
    /// Record a new status for a delivery
    Status {
        id: String,
        status: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show the most recent history events, newest first
    History {
        id: String,
        #[arg(long, default_value_t = 3)]
        last: usize,
    },
    Remove { id: String },
}

#[derive(Args, Debug)]
pub struct DeliveryArgs {
    #[arg(long, default_value = "")]
    pub route_id: String,
    #[arg(long, default_value = "")]
    pub driver_id: String,
    /// entregue | revertido | evidencia_invalida | contestacao_enviada | nok
    #[arg(long, default_value = "entregue")]
    pub status: String,
    #[arg(long)]
    pub client_name: String,
    #[arg(long)]
    pub address: String,
}
