use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::{Notification, NotificationCenter};
use crate::shared::icons::icon;

/// Handle to the on-screen notifications, provided through context
#[derive(Clone, Copy)]
pub struct Notifier {
    center: RwSignal<NotificationCenter>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            center: RwSignal::new(NotificationCenter::default()),
        }
    }

    /// Show a notification and schedule its removal if it auto-dismisses
    pub fn notify(&self, notification: Notification) {
        match notification.severity {
            super::Severity::Error => log::warn!("{}", notification.message),
            _ => log::info!("{}", notification.message),
        }
        let auto_dismiss = notification.auto_dismiss;
        let mut id = 0;
        self.center.update(|c| id = c.push(notification));

        if let Some(after) = auto_dismiss {
            let center = self.center;
            spawn_local(async move {
                TimeoutFuture::new(after.as_millis() as u32).await;
                // The view may be gone by now
                let _ = center.try_update(|c| c.dismiss(id));
            });
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.center.update(|c| {
            c.dismiss(id);
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not provided in context")
}

/// Toast stack, rendered once at the app root
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();
    let center = notifier.center;

    view! {
        <div class="notifications" role="status" aria-live="polite">
            <For
                each=move || center.with(|c| c.items().to_vec())
                key=|(id, _)| *id
                children=move |(id, notification)| {
                    let class = format!(
                        "notification notification--{}",
                        notification.severity.css_modifier()
                    );
                    view! {
                        <div class=class>
                            <span class="notification__message">{notification.message}</span>
                            <button
                                class="button button--icon notification__close"
                                title="Cerrar"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
