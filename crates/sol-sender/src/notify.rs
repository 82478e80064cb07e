use {console::style, std::fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Loading, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Transient, toast-style messages to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let message = notification.message;
        match notification.kind {
            NotificationKind::Info => println!("{} {}", style("ℹ").cyan(), style(message).cyan()),
            NotificationKind::Loading => {
                println!("{} {}", style("⏳").yellow(), style(message).yellow())
            }
            NotificationKind::Success => {
                println!("\n{}\n", style(format!("✓ {message}")).green().bold())
            }
            NotificationKind::Error => {
                println!("\n{}\n", style(format!("✗ {message}")).red().bold())
            }
        }
    }
}
