use std::time::Duration;

/// Success and info toasts disappear after this long; errors stay until dismissed
pub const AUTO_DISMISS: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// `None` means the notification stays until the user closes it
    pub auto_dismiss: Option<Duration>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            auto_dismiss: Some(AUTO_DISMISS),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            auto_dismiss: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
            auto_dismiss: Some(AUTO_DISMISS),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.auto_dismiss.is_none()
    }
}

/// Notifications currently on screen, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<(u64, Notification)>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push((id, notification));
        id
    }

    /// Returns false when the id is unknown (already dismissed)
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|(item_id, _)| *item_id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[(u64, Notification)] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_errors_are_persistent() {
        assert!(Notification::error("x").is_persistent());
        assert_eq!(Notification::success("x").auto_dismiss, Some(AUTO_DISMISS));
        assert_eq!(Notification::info("x").auto_dismiss, Some(AUTO_DISMISS));
    }

    #[test]
    fn test_push_and_dismiss() {
        let mut center = NotificationCenter::default();
        let a = center.push(Notification::success("Eliminado"));
        let b = center.push(Notification::error("Sin conexión"));
        assert_ne!(a, b);
        assert_eq!(center.items().len(), 2);

        assert!(center.dismiss(a));
        assert!(!center.dismiss(a));
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].1.message, "Sin conexión");
    }
}
