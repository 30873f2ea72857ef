//! Transient success/error/info feedback shown after loads and deletes.

mod state;
mod view;

pub use state::{Notification, NotificationCenter, Severity, AUTO_DISMISS};
pub use view::{use_notifier, NotificationHost, Notifier};
