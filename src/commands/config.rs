use super::CommandContext;
use crate::cli::ConfigActions;
use anyhow::Result;
use std::io::Write;

pub fn handle_config<W: Write>(
    ctx: &CommandContext,
    action: ConfigActions,
    out: &mut W,
) -> Result<bool> {
    match action {
        ConfigActions::Show => {
            let config = &ctx.config;
            writeln!(out, "\nValidation Settings:")?;
            writeln!(out, "  Minimum Phone Digits: {}", config.validation.min_phone_digits)?;
            writeln!(out, "\nMessages:")?;
            writeln!(out, "  Required: {}", config.messages.required)?;
            writeln!(out, "  Invalid Email: {}", config.messages.invalid_email)?;
            writeln!(out, "  Invalid Phone: {}", config.messages.invalid_phone)?;
            writeln!(out, "  Past Date: {}", config.messages.past_date)?;
            writeln!(out, "  Past Time: {}", config.messages.past_time)?;
            writeln!(out, "\nPresentation Settings:")?;
            writeln!(out, "  Currency Symbol: {}", config.presentation.currency_symbol)?;
            writeln!(
                out,
                "  Navbar Scroll Threshold: {}px",
                config.presentation.navbar_scroll_threshold
            )?;
            writeln!(out, "  Navbar Offset: {}px", config.presentation.navbar_offset)?;
            writeln!(out, "  Fade-in Threshold: {}", config.presentation.fade_in_threshold)?;
        }
        ConfigActions::Path => {
            writeln!(out, "{}", ctx.config_path.display())?;
        }
        ConfigActions::Init => {
            // Loading already wrote the defaults when the file was missing.
            writeln!(out, "Configuration ready at {}", ctx.config_path.display())?;
        }
    }
    Ok(true)
}
