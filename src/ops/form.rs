use tracing::debug;

use crate::model::task::{Task, TaskId};
use crate::model::TaskStore;
use crate::util::unicode;

/// Error type for form submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("missing title: please enter a task title")]
    MissingTitle,
}

/// What a successful form submission asks the store to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitIntent {
    /// Create a new task with this (already trimmed) title
    Add(String),
    /// Replace an existing task; same id, new title
    Update(Task),
}

impl CommitIntent {
    /// Apply the intent to the store. Returns the id of the task that was
    /// added or updated, or `None` if the store ignored it.
    pub fn apply(self, store: &mut TaskStore) -> Option<TaskId> {
        match self {
            CommitIntent::Add(title) => store.add(&title),
            CommitIntent::Update(task) => {
                let id = task.id();
                store.update(task).then_some(id)
            }
        }
    }
}

/// State of one visit to the add/edit form.
///
/// The task being edited is a copy taken when the form opens. Submitting
/// never mutates anything; it only produces a [`CommitIntent`].
#[derive(Debug, Clone)]
pub struct TaskForm {
    editing: Option<Task>,
    buffer: String,
    /// Byte offset into `buffer`, always on a grapheme boundary
    cursor: usize,
}

impl TaskForm {
    /// Open the form. `Some(task)` edits that task, `None` creates a new one.
    pub fn new(task: Option<Task>) -> Self {
        let buffer = match &task {
            Some(task) => task.title.clone(),
            None => String::new(),
        };
        TaskForm {
            cursor: buffer.len(),
            buffer,
            editing: task,
        }
    }

    /// The task being edited, if any
    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        match self.editing {
            Some(_) => "Update Task",
            None => "Save Task",
        }
    }

    // -----------------------------------------------------------------------
    // Text editing
    // -----------------------------------------------------------------------

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks become spaces since the field is single-line
    pub fn insert_str(&mut self, text: &str) {
        let clean = text.replace("\r\n", " ").replace(['\n', '\r', '\t'], " ");
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    /// Delete from the start of the previous word up to the cursor (Ctrl-W)
    pub fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.buffer, self.cursor);
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Place the cursor at a display column (mouse click in the field)
    pub fn move_to_col(&mut self, col: usize) {
        self.cursor = unicode::display_col_to_byte_offset(&self.buffer, col);
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Validate the field and build the commit intent.
    ///
    /// A blank field is rejected and the form keeps its contents.
    pub fn submit(&self) -> Result<CommitIntent, FormError> {
        let title = self.buffer.trim();
        if title.is_empty() {
            debug!("form submit rejected: blank title");
            return Err(FormError::MissingTitle);
        }
        Ok(match &self.editing {
            Some(task) => CommitIntent::Update(task.with_title(title)),
            None => CommitIntent::Add(title.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_task(title: &str) -> (TaskStore, Task) {
        let mut store = TaskStore::new();
        let id = store.add(title).unwrap();
        let task = store.get(id).unwrap().clone();
        (store, task)
    }

    #[test]
    fn new_form_starts_empty() {
        let form = TaskForm::new(None);
        assert_eq!(form.buffer(), "");
        assert!(!form.is_editing());
        assert_eq!(form.submit_label(), "Save Task");
    }

    #[test]
    fn edit_form_prefills_title() {
        let (_, task) = stored_task("Write report");
        let form = TaskForm::new(Some(task.clone()));
        assert_eq!(form.buffer(), "Write report");
        assert_eq!(form.cursor(), "Write report".len());
        assert_eq!(form.editing(), Some(&task));
        assert_eq!(form.submit_label(), "Update Task");
    }

    #[test]
    fn submit_blank_is_rejected_and_keeps_input() {
        let mut form = TaskForm::new(None);
        form.insert_str("   ");
        assert_eq!(form.submit(), Err(FormError::MissingTitle));
        assert_eq!(form.buffer(), "   ");

        let empty = TaskForm::new(None);
        assert_eq!(empty.submit(), Err(FormError::MissingTitle));
    }

    #[test]
    fn submit_new_emits_trimmed_add() {
        let mut form = TaskForm::new(None);
        form.insert_str("  Buy milk ");
        assert_eq!(form.submit(), Ok(CommitIntent::Add("Buy milk".into())));
    }

    #[test]
    fn submit_edit_keeps_id_and_done() {
        let (mut store, task) = stored_task("Write report");
        store.toggle_done(task.id());
        let task = store.get(task.id()).unwrap().clone();

        let mut form = TaskForm::new(Some(task.clone()));
        form.insert_str(" v2 ");
        match form.submit() {
            Ok(CommitIntent::Update(updated)) => {
                assert_eq!(updated.id(), task.id());
                assert_eq!(updated.title, "Write report v2");
                assert!(updated.done);
            }
            other => panic!("expected update intent, got {:?}", other),
        }
    }

    #[test]
    fn editing_a_copy_does_not_touch_the_store() {
        let (store, task) = stored_task("Original");
        let mut form = TaskForm::new(Some(task));
        form.move_end();
        form.insert_str(" changed");
        let _ = form.submit();
        assert_eq!(store.tasks()[0].title, "Original");
    }

    #[test]
    fn apply_add_and_update() {
        let mut store = TaskStore::new();
        let id = CommitIntent::Add("First".into()).apply(&mut store).unwrap();
        assert_eq!(store.len(), 1);

        let edited = store.get(id).unwrap().with_title("Renamed");
        assert_eq!(CommitIntent::Update(edited).apply(&mut store), Some(id));
        assert_eq!(store.tasks()[0].title, "Renamed");
    }

    #[test]
    fn apply_update_for_unknown_task_is_ignored() {
        let mut other = TaskStore::new();
        other.add("First elsewhere");
        let orphan_id = other.add("Second elsewhere").unwrap();
        let orphan = other.get(orphan_id).unwrap().clone();

        let mut store = TaskStore::new();
        store.add("Mine");
        assert_eq!(CommitIntent::Update(orphan.with_title("x")).apply(&mut store), None);
        assert_eq!(store.tasks()[0].title, "Mine");
    }

    #[test]
    fn cursor_editing() {
        let mut form = TaskForm::new(None);
        form.insert_str("milk");
        form.move_home();
        form.insert_str("oat ");
        assert_eq!(form.buffer(), "oat milk");
        assert_eq!(form.cursor(), 4);

        form.move_left();
        form.backspace();
        assert_eq!(form.buffer(), "oa milk");

        form.delete();
        assert_eq!(form.buffer(), "oamilk");

        form.move_end();
        form.move_right();
        assert_eq!(form.cursor(), form.buffer().len());
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut form = TaskForm::new(None);
        form.insert_str("cafe\u{0301}");
        form.backspace();
        assert_eq!(form.buffer(), "caf");
    }

    #[test]
    fn delete_word_back() {
        let mut form = TaskForm::new(None);
        form.insert_str("buy oat milk");
        form.delete_word_back();
        assert_eq!(form.buffer(), "buy oat ");
        form.delete_word_back();
        assert_eq!(form.buffer(), "buy ");
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut form = TaskForm::new(None);
        form.insert_str("line one\nline two\r\nthree");
        assert_eq!(form.buffer(), "line one line two three");
    }

    #[test]
    fn paste_turns_tabs_into_spaces() {
        let mut form = TaskForm::new(None);
        form.insert_str("a\tb");
        assert_eq!(form.buffer(), "a b");
        assert_eq!(form.cursor(), 3);
    }

    #[test]
    fn move_to_col_snaps_to_grapheme() {
        let mut form = TaskForm::new(None);
        form.insert_str("a你b");
        form.move_to_col(2);
        assert_eq!(form.cursor(), 1);
        form.move_to_col(50);
        assert_eq!(form.cursor(), form.buffer().len());
    }
}
