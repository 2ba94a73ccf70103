//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track transactions, forecast expenses, get savings advice
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal transaction analytics and expense forecasting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set TALLY_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    /// Config file (defaults to ~/.local/share/tally/config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Email of the user to act on (falls back to [defaults].user in config)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Manage users (list, add)
    Users {
        #[command(subcommand)]
        action: Option<UsersAction>,
    },

    /// Record a transaction
    Add {
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Amount, always non-negative
        #[arg(short, long)]
        amount: f64,

        /// Kind: income or expense
        #[arg(short, long)]
        kind: String,

        /// Category (defaults to "Other")
        #[arg(short, long)]
        category: Option<String>,

        /// Free-form note
        #[arg(long)]
        description: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Only this year
        #[arg(long)]
        year: Option<i32>,

        /// Only this month (1-12)
        #[arg(long)]
        month: Option<u32>,

        /// Only this kind: income or expense
        #[arg(long)]
        kind: Option<String>,

        /// Maximum number of rows
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction ID
        id: i64,
    },

    /// Delete every transaction in a month
    DeleteMonth {
        year: i32,
        /// Month (1-12)
        month: u32,
    },

    /// Delete every transaction in a year
    DeleteYear { year: i32 },

    /// Generate reports
    Report {
        #[command(subcommand)]
        report: ReportType,
    },

    /// Predict next month's total expense
    Forecast,

    /// Show savings recommendations and the expense forecast
    Recommend,
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// List all users
    List,

    /// Add a user (no-op if the email already exists)
    Add {
        /// Display name
        name: String,

        /// Email address (case-insensitive)
        email: String,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Income, expense and balance
    Summary {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        month: Option<u32>,

        /// Only this kind: income or expense
        #[arg(long)]
        kind: Option<String>,
    },

    /// Expense per category, highest first
    Categories {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        month: Option<u32>,
    },

    /// Twelve months of income and expense
    Trend {
        /// Year to show (defaults to the latest year with data)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Years that have transactions
    Years,
}
