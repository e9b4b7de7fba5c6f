use super::actions::Action;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs registry calls off the UI loop and feeds their outcome back as actions
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Sender for code that needs to queue actions itself
    pub fn sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_sender.clone()
    }

    /// Spawn `future` and dispatch the action it resolves to.
    ///
    /// `Action::None` results are dropped.
    pub fn spawn<Fut>(&mut self, description: impl Into<String>, future: Fut) -> TaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let description = description.into();
        let action_sender = self.action_sender.clone();
        let label = description.clone();

        let handle = tokio::spawn(async move {
            let action = future.await;
            log::debug!("Background task finished: {label}");
            if action != Action::None {
                let _ = action_sender.send(action);
            }
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Forget tasks whose handle has completed; returns their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                let elapsed = task.started_at.elapsed();
                if elapsed > std::time::Duration::from_secs(10) {
                    log::warn!("{} took {:.1}s", task.description, elapsed.as_secs_f32());
                }
            }
        }

        finished
    }

    /// Whether a task with exactly this description is still running
    pub fn is_running(&self, description: &str) -> bool {
        self.tasks
            .values()
            .any(|task| task.description == description && !task.handle.is_finished())
    }

    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
