use crate::booking::BookingSlot;
use crate::commands::CommandContext;
use crate::format::{format_date, format_time};
use crate::presentation::{apply_rejection, handle_submit, LogNotifier, SubmitOutcome, TerminalView};
use crate::validation::{parse_date_value, parse_time_value, FieldKind, FieldRule, FormSchema};
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::HashMap;

/// Interactive booking session in the terminal.
pub struct Application {
    ctx: CommandContext,
    schema: FormSchema,
}

impl Application {
    pub fn new(ctx: CommandContext) -> Self {
        Self { ctx, schema: FormSchema::booking() }
    }

    /// Prompt for every booking field, then submit. Fields that fail on submit
    /// are asked for again. Returns `false` if the session was abandoned.
    pub fn run(&self) -> Result<bool> {
        log::info!("Starting CleanBook booking session");

        let mut rl = DefaultEditor::new()?;
        let checker = self.ctx.checker();
        let mut slot = BookingSlot::new(checker.clone());
        let mut view = TerminalView::stdout();
        let mut notifier = LogNotifier;
        let mut values: HashMap<String, String> = HashMap::new();

        println!("Welcome to CleanBook! Let's book your cleaning.");
        println!("Dates are YYYY-MM-DD, times are HH:MM. Press CTRL-D to quit.");

        let mut pending: Vec<FieldRule> = self.schema.rules().to_vec();
        loop {
            for rule in &pending {
                loop {
                    let Some(value) = prompt(&mut rl, &rule.identifier)? else {
                        return Ok(false);
                    };
                    let now = self.ctx.clock.now();
                    let update = match rule.kind {
                        FieldKind::FutureDate => Some(slot.on_date_change(&value, now)),
                        FieldKind::FutureTimeOnDate => Some(slot.on_time_change(&value, now)),
                        _ => None,
                    };
                    if let Some(rejection) = update.and_then(|u| u.rejection) {
                        apply_rejection(&mut view, &mut notifier, &rejection);
                        continue;
                    }
                    values.insert(rule.identifier.clone(), value);
                    break;
                }
            }

            let fields = self.schema.snapshot(&values);
            let outcome =
                handle_submit(&checker, &mut view, &mut notifier, &fields, self.ctx.clock.now());
            match outcome {
                SubmitOutcome::Accepted => {
                    self.print_summary(&values);
                    return Ok(true);
                }
                SubmitOutcome::Blocked(verdict) => {
                    pending = self
                        .schema
                        .rules()
                        .iter()
                        .filter(|rule| verdict.error_for(&rule.identifier).is_some())
                        .cloned()
                        .collect();
                }
            }
        }
    }

    fn print_summary(&self, values: &HashMap<String, String>) {
        let value = |name: &str| values.get(name).map(String::as_str).unwrap_or_default();
        println!("\nBooking summary:");
        println!("  Name:    {}", value("name"));
        println!("  Email:   {}", value("email"));
        println!("  Phone:   {}", value("phone"));
        println!("  Address: {}", value("address"));
        println!("  Service: {}", value("service"));
        if let Some(date) = parse_date_value(value("date")) {
            println!("  Date:    {}", format_date(date));
        }
        if let Some(time) = parse_time_value(value("time")) {
            println!("  Time:    {}", format_time(time));
        }
    }
}

fn prompt(rl: &mut DefaultEditor, label: &str) -> Result<Option<String>> {
    match rl.readline(&format!("{}: ", label)) {
        Ok(line) => {
            let _ = rl.add_history_entry(line.as_str());
            Ok(Some(line.trim().to_string()))
        }
        Err(ReadlineError::Interrupted) => {
            println!("CTRL-C");
            Ok(None)
        }
        Err(ReadlineError::Eof) => {
            println!("CTRL-D");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
