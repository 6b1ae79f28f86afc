//! Console notifier

use crate::domain::{CheckResult, OutdatedEntry};
use crate::error::NotifyError;
use crate::notify::Notifier;
use colored::Colorize;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// Writes one line per outdated dependency
pub struct ConsoleNotifier<W: Write + Send> {
    writer: Mutex<W>,
    /// Whether to use colors
    color: bool,
}

impl ConsoleNotifier<Stdout> {
    /// Console notifier on standard output
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            color,
        }
    }

    /// Take the writer back, e.g. to inspect buffered output
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn format_line(&self, project: &str, entry: &OutdatedEntry) -> String {
        if self.color {
            format!(
                "{}: New version {} for dependency '{}'",
                project.bold(),
                entry.version.bright_green(),
                entry.dependency.cyan()
            )
        } else {
            format!(
                "{}: New version {} for dependency '{}'",
                project, entry.version, entry.dependency
            )
        }
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&self, result: &CheckResult) -> Result<(), NotifyError> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        for entry in &result.outdated {
            writeln!(writer, "{}", self.format_line(&result.project, entry))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: &CheckResult) -> String {
        let notifier = ConsoleNotifier::new(Vec::new(), false);
        notifier.notify(result).unwrap();
        String::from_utf8(notifier.into_inner()).unwrap()
    }

    #[test]
    fn test_single_outdated_is_one_line() {
        let result = CheckResult::new("/p/package.json", "demo")
            .with_outdated(vec![OutdatedEntry::new("left-pad", "2.0.0")]);

        let output = render(&result);

        assert_eq!(output, "demo: New version 2.0.0 for dependency 'left-pad'\n");
    }

    #[test]
    fn test_console_always_enumerates() {
        let result = CheckResult::new("/p/package.json", "demo").with_outdated(vec![
            OutdatedEntry::new("a", "1.0.0"),
            OutdatedEntry::new("b", "2.0.0"),
            OutdatedEntry::new("c", "3.0.0"),
        ]);

        let output = render(&result);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("'b'"));
        assert!(!output.contains("dependencies are out of date"));
    }

    #[test]
    fn test_up_to_date_prints_nothing() {
        let result = CheckResult::new("/p/package.json", "demo");
        assert!(render(&result).is_empty());
    }

    #[test]
    fn test_colored_line_keeps_content() {
        colored::control::set_override(true);
        let notifier = ConsoleNotifier::new(Vec::new(), true);
        let line = notifier.format_line("demo", &OutdatedEntry::new("left-pad", "2.0.0"));
        assert!(line.contains("left-pad"));
        assert!(line.contains("2.0.0"));
    }
}
