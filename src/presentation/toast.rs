//! Toast notifications.

use log::{error, info, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Something that can show a toast to the user.
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// Routes toasts to the log facade by severity.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, toast: Toast) {
        match toast.kind {
            ToastKind::Error => error!("{}", toast.message),
            ToastKind::Warning => warn!("{}", toast.message),
            ToastKind::Success | ToastKind::Info => info!("{}", toast.message),
        }
    }
}

/// Keeps every toast it is given.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub toasts: Vec<Toast>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }
}
