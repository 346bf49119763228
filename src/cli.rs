use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CleanBook - booking form validation from the terminal
#[derive(Debug, Parser)]
#[command(name = "cleanbook")]
#[command(about = "Validate cleaning-service booking forms and date/time selections")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, starts an interactive booking session)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Pin the current time (YYYY-MM-DD HH:MM) instead of using the system clock
    #[arg(long, global = true, env = "CLEANBOOK_NOW")]
    pub now: Option<String>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, env = "CLEANBOOK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a booking form file
    Check {
        /// TOML file with a [fields] table
        #[arg(required = true)]
        file: PathBuf,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a booking date selection (YYYY-MM-DD)
    Date {
        #[arg(required = true)]
        value: String,
    },

    /// Check a booking time selection (HH:MM) against the selected date
    Time {
        #[arg(required = true)]
        value: String,

        /// Selected booking date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        date: String,
    },

    /// View or create configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Show the current configuration
    Show,

    /// Print the config file location
    Path,

    /// Write the default configuration if none exists
    Init,
}
