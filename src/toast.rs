//! Toast Notifications
//!
//! Transient messages at the bottom of the screen. Only the newest toast is
//! shown; each one closes itself after the configured delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Bounded queue of visible toasts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    limit: usize,
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            next_id: 1,
            toasts: Vec::new(),
        }
    }

    /// Add a toast, evicting the oldest beyond the limit. Returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > self.limit {
            let overflow = self.toasts.len() - self.limit;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast handle shared through context
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl Toaster {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(1)),
            duration_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));
        let toaster = *self;
        spawn_local(async move {
            TimeoutFuture::new(toaster.duration_ms).await;
            toaster.dismiss(id);
        });
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_one_keeps_newest() {
        let mut queue = ToastQueue::new(1);
        queue.push(ToastKind::Error, "first");
        let second = queue.push(ToastKind::Success, "Login successful");
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
        assert_eq!(queue.toasts()[0].message, "Login successful");
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::new(3);
        let a = queue.push(ToastKind::Error, "a");
        let b = queue.push(ToastKind::Error, "b");
        queue.dismiss(a);
        assert_eq!(queue.toasts().iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
        // dismissing an evicted toast is harmless
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
    }
}
