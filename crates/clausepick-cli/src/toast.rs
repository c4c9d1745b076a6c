//! Notification strip: oldest first, each shown for a fixed time.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use clausepick_core::Notification;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    expires: Instant,
}

#[derive(Debug)]
pub struct Toasts {
    ttl: Duration,
    items: VecDeque<Toast>,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        self.items.push_back(Toast {
            notification,
            expires: now + self.ttl,
        });
    }

    /// Drop expired toasts. Returns `true` if any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.expires > now);
        self.items.len() != before
    }

    pub fn dismiss_oldest(&mut self) -> Option<Notification> {
        self.items.pop_front().map(|t| t.notification)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().map(|t| &t.notification)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
