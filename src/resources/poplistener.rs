//! Pop notification callback.
//!
//! The host registers at most one zero-argument callback. It is invoked
//! synchronously, on the game thread, once per popped bubble. Registering a
//! new callback replaces the previous one.

use bevy_ecs::prelude::Resource;

type PopCallback = Box<dyn FnMut() + Send + Sync>;

#[derive(Resource, Default)]
pub struct PopListener {
    callback: Option<PopCallback>,
}

impl PopListener {
    /// Register `callback`, replacing any previous one.
    pub fn set(&mut self, callback: impl FnMut() + Send + Sync + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear(&mut self) {
        self.callback = None;
    }

    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Invoke the callback if one is registered.
    pub fn notify(&mut self) {
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_notify_without_callback_is_noop() {
        let mut listener = PopListener::default();
        assert!(!listener.is_set());
        listener.notify();
    }

    #[test]
    fn test_last_registration_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut listener = PopListener::default();

        let counter = first.clone();
        listener.set(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = second.clone();
        listener.set(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        listener.notify();

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);

        listener.clear();
        listener.notify();
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
