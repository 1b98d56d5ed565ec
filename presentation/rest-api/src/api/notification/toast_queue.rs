use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use business::domain::notifier::Notifier;

/// Buffers notices until the UI collects them, and forwards each one to an
/// inner notifier. The oldest notice is dropped once `capacity` is reached;
/// a capacity of zero is treated as one.
pub struct ToastQueue {
    pending: Mutex<VecDeque<String>>,
    capacity: usize,
    forward: Arc<dyn Notifier>,
}

impl ToastQueue {
    pub fn new(capacity: usize, forward: Arc<dyn Notifier>) -> Self {
        let capacity = capacity.max(1);
        Self {
            pending: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            forward,
        }
    }

    /// Takes every pending notice, oldest first.
    pub fn drain(&self) -> Vec<String> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str) {
        {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            while pending.len() >= self.capacity {
                pending.pop_front();
            }
            pending.push_back(message.to_string());
        }
        self.forward.notify(message);
    }
}
