//! Input debouncing
//!
//! Rapid successive calls coalesce so the action runs at most once per
//! quiet window, with the most recent value only. Used by the catalog
//! search box (one filter pass per 200 ms of input quiescence).

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Quiet period for the catalog search box
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Coalesces bursts of calls into a single deferred action.
///
/// Each `call` replaces any pending one: the previous delay task is
/// aborted, so only the last value within a quiet window reaches the
/// action, and never out of order.
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    action: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            action: Arc::new(action),
            pending: None,
        }
    }

    /// Schedule the action with `value`, discarding any pending call.
    pub fn call(&mut self, value: T) {
        self.cancel();
        let delay = self.delay;
        let action = Arc::clone(&self.action);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(value);
        }));
    }

    /// Drop any pending call without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test(start_paused = true)]
    async fn test_burst_coalesces_to_last_value() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut debouncer = Debouncer::new(SEARCH_DEBOUNCE, move |q: String| {
            sink.lock().unwrap().push(q);
        });

        // Five query changes within 50ms of each other
        for q in ["б", "бу", "бул", "булг", "булгаков"] {
            debouncer.call(q.to_string());
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        tokio::time::sleep(Duration::from_millis(300)).await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), ["булгаков"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separated_calls_each_run() {
        let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut debouncer = Debouncer::new(SEARCH_DEBOUNCE, move |n| {
            sink.lock().unwrap().push(n);
        });

        debouncer.call(1);
        tokio::time::sleep(Duration::from_millis(250)).await;
        debouncer.call(2);
        tokio::time::sleep(Duration::from_millis(250)).await;

        assert_eq!(seen.lock().unwrap().as_slice(), [1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending() {
        let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut debouncer = Debouncer::new(SEARCH_DEBOUNCE, move |n| {
            sink.lock().unwrap().push(n);
        });

        debouncer.call(1);
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert!(seen.lock().unwrap().is_empty());
    }
}
