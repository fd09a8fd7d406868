//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "staffbook")]
#[command(about = "Staff roster for a single organization", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new roster and seed it with example staff
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Organization name shown in listings
        #[arg(long)]
        organization: Option<String>,

        /// Currency code used to display salaries
        #[arg(long)]
        currency: Option<String>,

        /// Delay every operation like a slow backend would
        #[arg(long)]
        simulate_latency: bool,
    },

    /// List staff, optionally filtered
    List {
        /// Only this department (e.g. Medical, IT)
        #[arg(short, long)]
        department: Option<String>,

        /// Only this role (e.g. Doctor, "Lab Technician")
        #[arg(short, long)]
        role: Option<String>,

        /// Hired on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Hired on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Case-insensitive match on name, email, department or role
        #[arg(short, long)]
        search: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one staff member
    Show {
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a staff member
    Add(AddArgs),

    /// Update fields of a staff member
    Update {
        id: String,

        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Remove a staff member
    Delete { id: String },

    /// Replace the roster with the example staff
    Reset,

    /// Headcount per department
    Departments,

    /// Headcount per role
    Roles,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub department: String,
    #[arg(long)]
    pub role: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub hire_date: String,
    #[arg(long)]
    pub salary: String,
    /// Active, "On Leave" or Terminated
    #[arg(long, default_value = "Active")]
    pub status: String,
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub hire_date: Option<String>,
    #[arg(long)]
    pub salary: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}
