//! Desktop notifier
//!
//! Sends at most one notification per manifest per cycle using the
//! `decide` collapsing rule.

use crate::domain::CheckResult;
use crate::error::NotifyError;
use crate::notify::{decide, NotificationAction, Notifier};

/// Title of every desktop notification
pub const NOTIFICATION_TITLE: &str = "NPM update notifier";

/// freedesktop sound theme name played with each notification
const NOTIFICATION_SOUND: &str = "message-new-instant";

/// A notification ready to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopNotification {
    pub title: String,
    pub body: String,
    /// Sound theme name played when shown
    pub sound: Option<String>,
    /// Stay visible until dismissed
    pub wait: bool,
}

impl DesktopNotification {
    /// Render an action for a project; `None` when there is nothing to say
    pub fn render(project: &str, action: &NotificationAction) -> Option<Self> {
        let body = match action {
            NotificationAction::None => return None,
            NotificationAction::Single {
                dependency,
                version,
            } => format!("{}: please update {} to {}", project, dependency, version),
            NotificationAction::Summary { count } => {
                format!("{}: {} dependencies are out of date", project, count)
            }
        };

        Some(Self {
            title: NOTIFICATION_TITLE.to_string(),
            body,
            sound: Some(NOTIFICATION_SOUND.to_string()),
            wait: true,
        })
    }
}

/// Mechanism that actually displays a notification
pub trait DesktopBackend: Send + Sync {
    fn show(&self, notification: &DesktopNotification) -> Result<(), NotifyError>;
}

/// Backend using the platform notification service
pub struct NotifyRustBackend;

impl DesktopBackend for NotifyRustBackend {
    fn show(&self, notification: &DesktopNotification) -> Result<(), NotifyError> {
        let mut native = notify_rust::Notification::new();
        native
            .appname("nun")
            .summary(&notification.title)
            .body(&notification.body);
        if let Some(ref sound) = notification.sound {
            native.sound_name(sound);
        }
        if notification.wait {
            native.timeout(notify_rust::Timeout::Never);
        }

        native
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::Desktop {
                message: e.to_string(),
            })
    }
}

/// Notifier that collapses results into a single desktop notification
pub struct DesktopNotifier<B: DesktopBackend> {
    backend: B,
}

impl<B: DesktopBackend> DesktopNotifier<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: DesktopBackend> Notifier for DesktopNotifier<B> {
    fn notify(&self, result: &CheckResult) -> Result<(), NotifyError> {
        let action = decide(&result.project, &result.outdated);
        match DesktopNotification::render(&result.project, &action) {
            Some(notification) => self.backend.show(&notification),
            None => Ok(()),
        }
    }
}
