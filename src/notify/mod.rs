//! Notification of outdated dependencies
//!
//! This module provides:
//! - The pure notification decision (`decide`)
//! - Console output, one line per outdated dependency
//! - Desktop notifications, at most one per manifest per cycle
//!
//! The two sinks differ on purpose: the console always enumerates, while the
//! desktop collapses two or more outdated dependencies into a count.

mod console;
mod desktop;

pub use console::ConsoleNotifier;
pub use desktop::{DesktopBackend, DesktopNotification, DesktopNotifier, NotifyRustBackend};

use crate::config::SinkKind;
use crate::domain::{CheckResult, OutdatedEntry};
use crate::error::NotifyError;
use std::sync::Arc;

/// What a desktop notification should say about one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationAction {
    /// Nothing is outdated
    None,
    /// Exactly one dependency is outdated
    Single { dependency: String, version: String },
    /// Two or more dependencies are outdated
    Summary { count: usize },
}

/// Decide how to report a manifest's outdated dependencies
pub fn decide(_project: &str, outdated: &[OutdatedEntry]) -> NotificationAction {
    match outdated {
        [] => NotificationAction::None,
        [only] => NotificationAction::Single {
            dependency: only.dependency.clone(),
            version: only.version.clone(),
        },
        many => NotificationAction::Summary { count: many.len() },
    }
}

/// Destination for check results
pub trait Notifier: Send + Sync {
    /// Report the result of one manifest check
    fn notify(&self, result: &CheckResult) -> Result<(), NotifyError>;
}

/// Create a notifier for the selected sink
pub fn create_notifier(sink: SinkKind, color: bool) -> Arc<dyn Notifier> {
    match sink {
        SinkKind::Console => Arc::new(ConsoleNotifier::stdout(color)),
        SinkKind::Desktop => Arc::new(DesktopNotifier::new(NotifyRustBackend)),
    }
}
