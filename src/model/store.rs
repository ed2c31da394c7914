use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use super::task::{Task, TaskId};

/// In-memory, insertion-ordered task collection.
///
/// The store is the only owner of the tasks. Views read them through
/// [`TaskStore::tasks`] and change them only through `add`, `update` and
/// `toggle_done`. Ids come from a process-wide counter, so a task from one
/// store never matches a task in another. Lookups by an id the store doesn't know are silent no-ops;
/// the return values exist for logging and tests, not for the user.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

/// Next id to hand out, shared by every store in the process
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl TaskStore {
    pub fn new() -> Self {
        TaskStore { tasks: Vec::new() }
    }

    /// All tasks, in the order they were added
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Position of a task in the list
    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Append a new task with the trimmed title.
    /// Blank titles are ignored and return `None`.
    pub fn add(&mut self, title: &str) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            debug!("ignoring add with blank title");
            return None;
        }

        let id = Self::issue_id();
        self.tasks.push(Task::new(id, title.to_string()));
        info!(%id, title, "task added");
        Some(id)
    }

    /// Replace the stored task that has the same id, keeping its position.
    /// Returns false (and changes nothing) if the id is unknown or the title
    /// is blank.
    pub fn update(&mut self, task: Task) -> bool {
        let id = task.id();
        let title = task.title.trim();
        if title.is_empty() {
            debug!(%id, "ignoring update with blank title");
            return false;
        }
        let title = title.to_string();

        match self.tasks.iter_mut().find(|t| t.id() == id) {
            Some(slot) => {
                let mut task = task;
                task.title = title;
                *slot = task;
                info!(%id, title = %slot.title, "task updated");
                true
            }
            None => {
                debug!(%id, "update for unknown task ignored");
                false
            }
        }
    }

    /// Flip the done flag of a task. Returns false if the id is unknown.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id() == id) {
            Some(task) => {
                task.done = !task.done;
                info!(%id, done = task.done, "task toggled");
                true
            }
            None => {
                debug!(%id, "toggle for unknown task ignored");
                false
            }
        }
    }

    fn issue_id() -> TaskId {
        TaskId::from_raw(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}
