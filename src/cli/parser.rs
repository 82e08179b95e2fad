use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fuellog
/// CLI application to log fuel economy and refuels in CSV files
#[derive(Parser)]
#[command(
    name = "fuellog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple vehicle usage log: record fuel economy and refuels, compute consumption and cost",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a second vehicle)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print diagnostic logs on stderr (same as RUST_LOG=debug)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the log files
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operations journal
    Log {
        #[arg(long = "print", help = "Print the internal journal")]
        print: bool,
    },

    /// Add an entry to one of the logs
    Add {
        #[command(subcommand)]
        entry: AddEntry,
    },

    /// Guess economy and odometer from recognized dashboard text
    Scan {
        /// JSON file with the recognizer output: [{"text": "...", "confidence": 0.9}, ...]
        #[arg(long = "spans", value_name = "FILE")]
        spans: String,

        #[arg(long = "economy", help = "Fallback economy (default from config)")]
        economy: Option<f64>,

        #[arg(long = "odometer", help = "Fallback odometer (default from config)")]
        odometer: Option<u64>,

        /// Append the suggestion to the consumption log
        #[arg(long = "save")]
        save: bool,

        #[arg(long = "date", help = "Reading date (default: today)", requires = "save")]
        date: Option<String>,

        #[arg(long = "mode", requires = "save")]
        mode: Option<String>,

        #[arg(long = "route", requires = "save")]
        route: Option<String>,
    },

    /// List the rows of a log
    List {
        /// consumption | refill
        kind: String,

        #[arg(long, short, help = "Filter by year, month, day or a range (YYYY-MM:YYYY-MM)")]
        period: Option<String>,
    },

    /// Edit one row of a log by its row number
    Edit {
        /// consumption | refill
        kind: String,

        /// Row number as shown by `list`
        row: usize,

        /// Column assignments, e.g. --set Station=PTT --set Quantity=32.5
        #[arg(long = "set", value_name = "COLUMN=VALUE", required = true)]
        set: Vec<String>,
    },

    /// Delete one row of a log by its row number
    Del {
        /// consumption | refill
        kind: String,

        /// Row number as shown by `list`
        row: usize,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Show economy, trip and cost statistics
    Stats,

    /// Export a log to CSV or JSON
    Export {
        /// consumption | refill
        #[arg(long)]
        kind: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the log files
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum AddEntry {
    /// Fuel-economy reading from the trip computer
    Consumption {
        /// Reading date (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Economy in km per litre
        #[arg(long)]
        economy: f64,

        /// Odometer in km
        #[arg(long)]
        odometer: f64,

        /// Driving mode: C=City, H=Highway, M=Mixed, E=Eco (free text accepted)
        #[arg(long)]
        mode: Option<String>,

        /// Free-form note about the route
        #[arg(long)]
        route: Option<String>,
    },

    /// Refueling event
    Refill {
        /// Refill date (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        station: String,

        #[arg(long = "fuel")]
        fuel_type: String,

        /// Price per litre
        #[arg(long)]
        price: f64,

        /// Litres filled
        #[arg(long = "qty")]
        quantity: f64,

        /// Odometer in km
        #[arg(long)]
        odometer: f64,
    },
}
