use crate::app::Application;
use crate::cli::{Cli, Commands};
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::{get_config_path, Config};
use crate::validation::FormChecker;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub mod booking;
pub mod check;
pub mod config;

/// Everything a command needs: loaded settings and the clock.
pub struct CommandContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub clock: Box<dyn Clock>,
}

impl CommandContext {
    pub fn new(config: Config, config_path: PathBuf, clock: Box<dyn Clock>) -> Self {
        Self { config, config_path, clock }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => get_config_path()?,
        };
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

        let clock: Box<dyn Clock> = match cli.now.as_deref() {
            Some(now) => {
                log::debug!("Using pinned clock: {}", now);
                Box::new(FixedClock::parse(now)?)
            }
            None => Box::new(SystemClock),
        };

        Ok(Self::new(config, config_path, clock))
    }

    pub fn checker(&self) -> FormChecker {
        FormChecker::from_config(&self.config)
    }
}

/// Run the parsed command line. Returns `false` when the input was rejected.
pub fn run(cli: Cli) -> Result<bool> {
    let ctx = CommandContext::from_cli(&cli)?;

    match cli.command {
        None => Application::new(ctx).run(),
        Some(command) => execute(&ctx, command, &mut std::io::stdout().lock()),
    }
}

pub fn execute<W: Write>(ctx: &CommandContext, command: Commands, out: &mut W) -> Result<bool> {
    match command {
        Commands::Check { file, json } => check::handle_check(ctx, &file, json, out),
        Commands::Date { value } => booking::handle_date(ctx, &value, out),
        Commands::Time { value, date } => booking::handle_time(ctx, &value, &date, out),
        Commands::Config { action } => config::handle_config(ctx, action, out),
    }
}
