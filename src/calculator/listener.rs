//! Display listeners.

/// Callback invoked with the display string after every transition.
///
/// Listeners receive the string read-only. Because notification happens
/// while the calculator is mutably borrowed, a listener cannot press keys
/// on the calculator that is notifying it.
///
/// Callbacks must be `Send` so a [`Calculator`](crate::Calculator) can be
/// handed to another thread (a UI worker, for example). Share state with
/// `Arc<Mutex<_>>` or atomics rather than `Rc<RefCell<_>>`.
///
/// # Example
///
/// ```rust
/// use pocketcalc::calculator::DisplayListener;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let mut listener = DisplayListener::new(move |s: &str| sink.lock().unwrap().push(s.to_string()));
///
/// listener.notify("42");
/// assert_eq!(*seen.lock().unwrap(), vec!["42".to_string()]);
/// ```
pub struct DisplayListener {
    callback: Box<dyn FnMut(&str) + Send>,
}

impl DisplayListener {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        DisplayListener {
            callback: Box::new(callback),
        }
    }

    pub fn notify(&mut self, display: &str) {
        (self.callback)(display)
    }
}

impl std::fmt::Debug for DisplayListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayListener").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn notify_invokes_callback_each_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut listener = DisplayListener::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        listener.notify("1");
        listener.notify("12");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn callback_state_survives_between_notifications() {
        let longest = Arc::new(AtomicUsize::new(0));
        let tracker = Arc::clone(&longest);
        let mut listener = DisplayListener::new(move |s: &str| {
            tracker.fetch_max(s.len(), Ordering::SeqCst);
        });

        listener.notify("overflow");
        listener.notify("0");

        assert_eq!(longest.load(Ordering::SeqCst), "overflow".len());
    }

    #[test]
    fn listener_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<DisplayListener>();
    }
}
