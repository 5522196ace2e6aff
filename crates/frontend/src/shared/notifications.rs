//! Transient notifications (toasts) for row action results.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Oldest notifications are dropped beyond this count
pub const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Error => "notification notification--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// App-wide notification sink, provided via context
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
            timeout_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{}", message);
        self.push(NotificationKind::Error, message);
    }

    fn push(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        if self.timeout_ms == 0 {
            return;
        }
        let queue = self.queue;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.queue.with(|q| q.items().to_vec())
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided")
}

/// Renders the notification stack in the top-right corner
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || service.items()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            <span class="notification__message">{n.message}</span>
                            <button
                                class="notification__close"
                                title="Dismiss"
                                on:click=move |_| service.dismiss(id)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = NotificationQueue::default();
        let first = queue.push(NotificationKind::Success, "Student deleted");
        let second = queue.push(NotificationKind::Error, "HTTP 500");
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, second);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn test_oldest_are_dropped_beyond_limit() {
        let mut queue = NotificationQueue::default();
        for i in 0..MAX_VISIBLE + 2 {
            queue.push(NotificationKind::Success, format!("n{}", i));
        }
        assert_eq!(queue.items().len(), MAX_VISIBLE);
        assert_eq!(queue.items()[0].message, "n2");
    }
}
