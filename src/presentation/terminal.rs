use super::FormView;
use std::io::Write;

/// Renders form markers as lines of text.
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    out: W,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: std::io::stdout() }
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::error!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> FormView for TerminalView<W> {
    fn mark_invalid(&mut self, field: &str, message: &str) {
        self.line(format_args!("  ✗ {:<10} {}", field, message));
    }

    fn clear_invalid(&mut self, field: &str) {
        self.line(format_args!("  ✓ {}", field));
    }

    fn clear_value(&mut self, field: &str) {
        self.line(format_args!("  ↺ {} cleared", field));
    }

    fn set_submit_enabled(&mut self, _enabled: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_view_output() {
        let mut view = TerminalView::new(Vec::new());
        view.clear_invalid("name");
        view.mark_invalid("email", "Please enter a valid email address");

        let output = String::from_utf8(view.into_inner()).unwrap();
        assert!(output.contains("✓ name"));
        assert!(output.contains("✗ email"));
        assert!(output.contains("Please enter a valid email address"));
    }
}
