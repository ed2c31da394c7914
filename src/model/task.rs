use std::fmt;

/// Opaque task identifier, assigned by the store when a task is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        TaskId(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single entry in the task list.
///
/// Tasks only come into existence through [`TaskStore::add`](crate::model::TaskStore::add),
/// so the id field is private: a task handed to the form or to
/// [`TaskStore::update`](crate::model::TaskStore::update) always carries an id
/// the store issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    /// Task title, trimmed and non-empty once stored
    pub title: String,
    /// Whether the task has been checked off
    pub done: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, title: String) -> Self {
        Task {
            id,
            title,
            done: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// A copy of this task with a different title (same id and done flag)
    pub fn with_title(&self, title: impl Into<String>) -> Task {
        Task {
            title: title.into(),
            ..self.clone()
        }
    }

    /// The checkbox drawn in front of the title
    pub fn checkbox_symbol(&self) -> &'static str {
        if self.done { "[\u{2713}]" } else { "[ ]" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_not_done() {
        let task = Task::new(TaskId::from_raw(7), "Buy milk".into());
        assert!(!task.done);
        assert_eq!(task.id(), TaskId::from_raw(7));
        assert_eq!(task.checkbox_symbol(), "[ ]");
    }

    #[test]
    fn with_title_keeps_id_and_done() {
        let mut task = Task::new(TaskId::from_raw(1), "Old".into());
        task.done = true;
        let renamed = task.with_title("New");
        assert_eq!(renamed.id(), task.id());
        assert!(renamed.done);
        assert_eq!(renamed.title, "New");
        assert_eq!(renamed.checkbox_symbol(), "[\u{2713}]");
    }

    #[test]
    fn id_display() {
        assert_eq!(TaskId::from_raw(42).to_string(), "#42");
    }
}
