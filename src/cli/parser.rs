use crate::export::ExportFormat;
use crate::models::event_kind::EventKind;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for geoclock
/// CLI time clock with geofenced work zones
#[derive(Parser)]
#[command(
    name = "geoclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in/out with geofenced work zones and track worked hours using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user (email); defaults to `default_user` from the configuration
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum HistoryFilter {
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    #[default]
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check configuration file for missing fields and fill them with defaults"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Clock in or out (toggles when neither is given)
    Clock {
        /// `in` or `out`; omitted = the next expected action
        #[arg(value_enum)]
        kind: Option<EventKind>,

        #[arg(long = "lat", requires = "lon", allow_hyphen_values = true, help = "Current latitude")]
        lat: Option<String>,

        #[arg(long = "lon", requires = "lat", allow_hyphen_values = true, help = "Current longitude")]
        lon: Option<String>,

        #[arg(long = "zone", help = "Zone id to use when the position matches no zone")]
        zone: Option<i64>,

        #[arg(
            long = "at",
            help = "Event time: RFC3339, 'YYYY-MM-DD HH:MM' or 'HH:MM' (local); default now"
        )]
        at: Option<String>,
    },

    /// Show clock state and hours for today, this week and this month
    Status,

    /// List past events grouped by day with daily totals
    History {
        #[arg(long, value_enum, default_value_t = HistoryFilter::All)]
        filter: HistoryFilter,

        #[arg(
            long,
            short,
            conflicts_with = "filter",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, A:B)"
        )]
        period: Option<String>,
    },

    /// Manage work zones (geofences)
    Zone {
        #[command(subcommand)]
        action: ZoneAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Export raw time records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: time_records_<today>.<ext>)")]
        file: Option<String>,

        #[arg(
            long = "users",
            value_delimiter = ',',
            help = "Only these users (comma-separated emails)"
        )]
        users: Vec<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ZoneAction {
    /// Register a new zone
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        address: String,

        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        #[arg(long, allow_hyphen_values = true)]
        lon: String,

        #[arg(long, default_value = "100", help = "Radius in meters")]
        radius: String,
    },

    /// List zones
    List,

    /// Delete a zone
    Del { id: i64 },

    /// Show which zone contains a position and the distance to every zone
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create a user
    Add {
        #[arg(long)]
        email: String,

        #[arg(long = "first")]
        first_name: String,

        #[arg(long = "last")]
        last_name: String,

        #[arg(long)]
        phone: String,

        #[arg(long, default_value = "staff", help = "staff, supervisor or admin")]
        role: String,

        #[arg(long = "number", default_value = "", help = "Employee number")]
        employee_number: String,

        #[arg(long, help = "Assigned zone id")]
        zone: Option<i64>,
    },

    /// List users (newest first)
    List {
        #[arg(long, help = "Filter by name or email")]
        search: Option<String>,
    },

    /// Delete a user and their time records
    Del { email: String },

    /// Change a user's role
    Role { email: String, role: String },

    /// Assign a zone to a user, or remove it
    Assign {
        email: String,

        #[arg(long, conflicts_with = "none")]
        zone: Option<i64>,

        #[arg(long, help = "Remove the assigned zone")]
        none: bool,
    },

    /// Complete a user's profile
    Profile {
        email: String,

        #[arg(long = "first")]
        first_name: String,

        #[arg(long = "last")]
        last_name: String,

        #[arg(long)]
        phone: String,
    },
}
