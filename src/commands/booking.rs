use super::CommandContext;
use crate::booking::{BookingSlot, SlotUpdate};
use crate::format::{format_date, format_time};
use crate::validation::{parse_date_value, parse_time_value};
use anyhow::Result;
use std::io::Write;

pub fn handle_date<W: Write>(ctx: &CommandContext, value: &str, out: &mut W) -> Result<bool> {
    let mut slot = BookingSlot::new(ctx.checker());
    let update = slot.on_date_change(value, ctx.clock.now());
    if !report(&update, out)? {
        return Ok(false);
    }

    match parse_date_value(slot.date()) {
        Some(date) => writeln!(out, "✓ {} is available for booking", format_date(date))?,
        None => writeln!(out, "No date selected")?,
    }
    Ok(true)
}

pub fn handle_time<W: Write>(
    ctx: &CommandContext,
    value: &str,
    date: &str,
    out: &mut W,
) -> Result<bool> {
    let now = ctx.clock.now();
    let mut slot = BookingSlot::new(ctx.checker());
    if !report(&slot.on_date_change(date, now), out)? {
        return Ok(false);
    }
    if !report(&slot.on_time_change(value, now), out)? {
        return Ok(false);
    }

    if slot.time().trim().is_empty() {
        writeln!(out, "No time selected")?;
        return Ok(true);
    }
    let Some(time) = parse_time_value(slot.time()) else {
        writeln!(out, "✗ {}", ctx.config.messages.invalid_time)?;
        return Ok(false);
    };
    writeln!(out, "✓ {} is available for booking", format_time(time))?;
    Ok(true)
}

/// Print a rejection, if any. Returns whether the change was accepted.
fn report<W: Write>(update: &SlotUpdate, out: &mut W) -> Result<bool> {
    match &update.rejection {
        Some(rejection) => {
            writeln!(out, "✗ {}", rejection.error.message)?;
            if rejection.clear_requested {
                writeln!(out, "  {} cleared", rejection.error.field)?;
            }
            Ok(false)
        }
        None => Ok(true),
    }
}
