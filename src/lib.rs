pub mod app;
pub mod booking;
pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod format;
pub mod page;
pub mod presentation;
pub mod validation;

use anyhow::Result;
use log::*;

/// Run the command line. Returns `false` when the checked input was rejected.
pub fn run(cli: cli::Cli) -> Result<bool> {
    debug!("Running with {:?}", cli);
    commands::run(cli)
}

/// Debug-level logging without timestamps. Safe to call more than once.
pub fn init_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .is_test(true)
        .try_init();
}

// Re-export commonly used types
pub use booking::{
    check_time_availability, validate_booking_date, BookingSlot, BookingState, Rejection,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use validation::{
    validate_form, FieldKind, FieldSpec, FormChecker, FormSchema, ValidationError, Verdict,
};
