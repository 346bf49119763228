use super::CommandContext;
use crate::presentation::{render_verdict, TerminalView};
use crate::validation::{FieldRule, FormSchema, Verdict};
use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// A form saved as TOML: optional field declarations plus the entered values.
///
/// Without `[[rules]]` the booking form is assumed.
#[derive(Debug, Default, Deserialize)]
pub struct FormFile {
    #[serde(default)]
    pub rules: Vec<FieldRule>,
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

impl FormFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse form file {}", path.display()))
    }

    pub fn schema(&self) -> Result<FormSchema> {
        if self.rules.is_empty() {
            return Ok(FormSchema::booking());
        }
        FormSchema::new(self.rules.clone()).context("Invalid form declaration")
    }
}

pub fn handle_check<W: Write>(
    ctx: &CommandContext,
    path: &Path,
    json: bool,
    out: &mut W,
) -> Result<bool> {
    let form = FormFile::load(path)?;
    let schema = form.schema()?;

    for name in form.fields.keys() {
        if !schema.field_names().any(|declared| declared == name.as_str()) {
            warn!("Ignoring undeclared field '{}'", name);
        }
    }

    let fields = schema.snapshot(&form.fields);
    let verdict = ctx.checker().validate(&fields, ctx.clock.now());

    if json {
        serde_json::to_writer_pretty(&mut *out, &verdict)?;
        writeln!(out)?;
    } else {
        render_verdict(&mut TerminalView::new(&mut *out), &fields, &verdict);
        writeln!(out, "{}", summary(ctx, &verdict))?;
    }

    Ok(verdict.is_valid())
}

fn summary(ctx: &CommandContext, verdict: &Verdict) -> String {
    if verdict.is_valid() {
        ctx.config.messages.submit_accepted.clone()
    } else {
        format!("{} ({} failing)", ctx.config.messages.submit_blocked, verdict.errors().len())
    }
}
