//! Per-key debounced tasks on the tokio runtime.

use std::{collections::HashMap, hash::Hash, time::Duration};

use tokio::{runtime::Handle, task::JoinHandle};

/// Runs a task once no newer task was scheduled for the same key within
/// `delay`. Scheduling again for a key aborts the previous timer.
///
/// Without a tokio runtime the task runs immediately.
#[derive(Debug)]
pub struct Debouncer<K>
where
    K: Eq + Hash,
{
    delay: Duration,
    pending: HashMap<K, JoinHandle<()>>,
}

impl<K> Debouncer<K>
where
    K: Eq + Hash,
{
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: HashMap::new(),
        }
    }

    pub fn schedule<F>(&mut self, key: K, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(previous) = self.pending.remove(&key) {
            previous.abort();
        }

        let Ok(handle) = Handle::try_current() else {
            task();
            return;
        };

        let delay = self.delay;
        let join = handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        self.pending.insert(key, join);
    }

    /// Number of timers that have not fired yet.
    pub fn pending(&self) -> usize {
        self.pending
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}

impl<K> Drop for Debouncer<K>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce() + Send>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let make = {
            let log = log.clone();
            move |value: &'static str| {
                let log = log.clone();
                Box::new(move || log.lock().unwrap().push(value)) as Box<dyn FnOnce() + Send>
            }
        };
        (log, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_schedules_run_last_task_once() {
        let (log, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule("base", make("4"));
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule("base", make("40"));
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule("base", make("400"));

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*log.lock().unwrap(), vec!["400"]);
        assert_eq!(debouncer.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_debounce_independently() {
        let (log, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule("base", make("base"));
        debouncer.schedule("rate", make("rate"));

        tokio::time::sleep(Duration::from_millis(400)).await;
        let mut seen = log.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, vec!["base", "rate"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_drops_pending_tasks() {
        let (log, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule("base", make("base"));
        assert_eq!(debouncer.pending(), 1);
        debouncer.cancel_all();

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_tasks() {
        let (log, make) = recorder();
        {
            let mut debouncer = Debouncer::new(Duration::from_millis(300));
            debouncer.schedule("base", make("base"));
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_without_runtime_runs_immediately() {
        let (log, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule("base", make("now"));
        assert_eq!(*log.lock().unwrap(), vec!["now"]);
        assert_eq!(debouncer.pending(), 0);
    }
}
