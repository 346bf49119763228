//! Adapter between validation results and whatever renders the form.
//
// Nothing in `validation` or `booking` touches presentation state. The
// functions here take their verdicts and drive a `FormView`.

use crate::booking::Rejection;
use crate::validation::{FieldSpec, FormChecker, Verdict};
use chrono::NaiveDateTime;
use log::debug;

mod terminal;
mod toast;

pub use terminal::TerminalView;
pub use toast::*;

/// The rendering side of a form.
pub trait FormView {
    fn mark_invalid(&mut self, field: &str, message: &str);
    fn clear_invalid(&mut self, field: &str);
    fn clear_value(&mut self, field: &str);
    fn set_submit_enabled(&mut self, enabled: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Blocked(Verdict),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Mark every failing field and clear the markers of the others.
pub fn render_verdict<V: FormView + ?Sized>(view: &mut V, fields: &[FieldSpec], verdict: &Verdict) {
    for field in fields {
        match verdict.error_for(&field.identifier) {
            Some(error) => view.mark_invalid(&field.identifier, &error.message),
            None => view.clear_invalid(&field.identifier),
        }
    }
}

/// Validate on submit. A failing form is blocked and the user is told why.
pub fn handle_submit<V, N>(
    checker: &FormChecker,
    view: &mut V,
    notifier: &mut N,
    fields: &[FieldSpec],
    now: NaiveDateTime,
) -> SubmitOutcome
where
    V: FormView + ?Sized,
    N: Notifier + ?Sized,
{
    view.set_submit_enabled(false);
    let verdict = checker.validate(fields, now);
    render_verdict(view, fields, &verdict);
    view.set_submit_enabled(true);

    if verdict.is_valid() {
        notifier.notify(Toast::new(ToastKind::Success, &checker.messages().submit_accepted));
        SubmitOutcome::Accepted
    } else {
        debug!("Submission blocked by {} failing fields", verdict.errors().len());
        notifier.notify(Toast::new(ToastKind::Error, &checker.messages().submit_blocked));
        SubmitOutcome::Blocked(verdict)
    }
}

/// Apply a live date/time rejection: clear the value if asked, mark the field
/// and warn.
pub fn apply_rejection<V, N>(view: &mut V, notifier: &mut N, rejection: &Rejection)
where
    V: FormView + ?Sized,
    N: Notifier + ?Sized,
{
    if rejection.clear_requested {
        view.clear_value(&rejection.error.field);
    }
    view.mark_invalid(&rejection.error.field, &rejection.error.message);
    notifier.notify(Toast::new(ToastKind::Warning, &rejection.error.message));
}
