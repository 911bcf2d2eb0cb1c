pub mod data_loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

pub const PURCHASE_ORDERS_TASK: &str = "load_purchase_orders";
pub const ONHAND_TASK: &str = "load_onhand";

/// Tracks running fetches by id.
///
/// Fetches are never cancelled by a newer one: every request reports back
/// and the last response to resolve wins. Tasks are only aborted on shutdown.
pub struct BackgroundTaskManager {
    tasks: HashMap<String, Vec<JoinHandle<()>>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn_load_task<F>(&mut self, task_id: impl Into<String>, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handles = self.tasks.entry(task_id.into()).or_default();
        handles.retain(|handle| !handle.is_finished());
        handles.push(tokio::spawn(future));
    }

    /// Number of tracked tasks under `task_id` that have not finished
    pub fn running(&self, task_id: &str) -> usize {
        self.tasks
            .get(task_id)
            .map(|handles| handles.iter().filter(|h| !h.is_finished()).count())
            .unwrap_or(0)
    }

    /// Abort every tracked task (shutdown)
    pub fn cancel_all(&mut self) {
        for handle in self.tasks.drain().flat_map(|(_, handles)| handles) {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_overlapping_tasks_both_report_last_resolved_last() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut manager = BackgroundTaskManager::new();

        let slow_tx = tx.clone();
        manager.spawn_load_task(ONHAND_TASK, async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = slow_tx.send("first issued");
        });
        manager.spawn_load_task(ONHAND_TASK, async move {
            let _ = tx.send("second issued");
        });
        assert!(manager.running(ONHAND_TASK) >= 1);

        assert_eq!(rx.recv().await, Some("second issued"));
        assert_eq!(rx.recv().await, Some("first issued"));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_cancel_all_aborts_running_tasks() {
        let (tx, mut rx) = mpsc::unbounded_channel::<&str>();
        let mut manager = BackgroundTaskManager::new();

        manager.spawn_load_task(PURCHASE_ORDERS_TASK, async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = tx.send("late");
        });
        manager.cancel_all();

        assert_eq!(rx.recv().await, None);
        assert_eq!(manager.running(PURCHASE_ORDERS_TASK), 0);
    }

    #[tokio::test]
    async fn test_distinct_ids_run_side_by_side() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut manager = BackgroundTaskManager::new();

        let po_tx = tx.clone();
        manager.spawn_load_task(PURCHASE_ORDERS_TASK, async move {
            let _ = po_tx.send(PURCHASE_ORDERS_TASK);
        });
        manager.spawn_load_task(ONHAND_TASK, async move {
            let _ = tx.send(ONHAND_TASK);
        });

        let mut received = vec![rx.recv().await, rx.recv().await];
        received.sort();
        assert_eq!(received, vec![Some(ONHAND_TASK), Some(PURCHASE_ORDERS_TASK)]);
    }
}
