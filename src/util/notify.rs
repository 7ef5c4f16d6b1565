//! Push notices that dismiss themselves.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticeQueue};
use crate::util::timer;

/// Handle shared through context for raising notices from any view.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NoticeQueue>,
    ttl: Duration,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self { queue: RwSignal::new(NoticeQueue::default()), ttl }
    }

    pub fn queue(&self) -> RwSignal<NoticeQueue> {
        self.queue
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Info, title, description);
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Success, title, description);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|queue| queue.dismiss(id));
    }

    fn push(&self, kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) {
        let (title, description) = (title.into(), description.into());
        let Some(id) = self.queue.try_update(|queue| queue.push(kind, title, description)) else {
            return;
        };
        let notifier = *self;
        leptos::task::spawn_local(async move {
            timer::sleep(notifier.ttl).await;
            notifier.dismiss(id);
        });
    }
}
