use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::model::{AppConfig, Task, TaskId, TaskStore};
use crate::ops::form::{FormError, TaskForm};

use super::input;
use super::render;
use super::theme::Theme;

/// Which screen is currently displayed
#[derive(Debug, Clone)]
pub enum Screen {
    /// The task list (entry screen)
    List,
    /// The add/edit form
    Form(TaskForm),
}

/// What the user asked for on the list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListIntent {
    /// Flip a task's done flag, staying on the list
    ToggleDone(TaskId),
    /// Open the form on a copy of this task
    Edit(Task),
    /// Open the form for a new task
    New,
}

/// A modal message shown over the current screen until the next key or click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

impl From<&FormError> for Alert {
    fn from(err: &FormError) -> Self {
        match err {
            FormError::MissingTitle => Alert {
                title: "Missing title",
                message: "Please enter a task title.",
            },
        }
    }
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub screen: Screen,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub should_quit: bool,
    /// Selected row on the list screen
    pub cursor: usize,
    /// First visible row on the list screen
    pub scroll: usize,
    pub alert: Option<Alert>,
    /// Terminal area of the last draw, used to map mouse clicks to widgets
    pub viewport: Rect,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App::with_store(TaskStore::new(), config)
    }

    pub fn with_store(store: TaskStore, config: &AppConfig) -> Self {
        App {
            store,
            screen: Screen::List,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            should_quit: false,
            cursor: 0,
            scroll: 0,
            alert: None,
            viewport: Rect::default(),
        }
    }

    /// The task under the list cursor
    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.cursor)
    }

    /// The open form, if the form screen is showing
    pub fn form(&self) -> Option<&TaskForm> {
        match &self.screen {
            Screen::Form(form) => Some(form),
            Screen::List => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut TaskForm> {
        match &mut self.screen {
            Screen::Form(form) => Some(form),
            Screen::List => None,
        }
    }

    /// Carry out a list-screen intent
    pub fn dispatch(&mut self, intent: ListIntent) {
        match intent {
            ListIntent::ToggleDone(id) => {
                self.store.toggle_done(id);
            }
            ListIntent::Edit(task) => self.open_form(Some(task)),
            ListIntent::New => self.open_form(None),
        }
    }

    pub fn open_form(&mut self, task: Option<Task>) {
        debug!(editing = ?task.as_ref().map(|t| t.id()), "opening form");
        self.screen = Screen::Form(TaskForm::new(task));
    }

    /// Leave the form without committing anything
    pub fn close_form(&mut self) {
        self.screen = Screen::List;
        self.clamp_cursor();
    }

    /// Submit the open form. On success the intent is applied to the store
    /// and the list is shown again with the affected task selected. A blank
    /// title raises an alert and leaves the form as it was.
    pub fn submit_form(&mut self) {
        let result = match &self.screen {
            Screen::Form(form) => form.submit(),
            Screen::List => return,
        };

        match result {
            Ok(intent) => {
                if let Some(id) = intent.apply(&mut self.store)
                    && let Some(idx) = self.store.index_of(id)
                {
                    self.cursor = idx;
                }
                self.close_form();
            }
            Err(err) => {
                debug!(%err, "form rejected");
                self.alert = Some(Alert::from(&err));
            }
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.store.len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_bottom(&mut self) {
        self.cursor = self.store.len().saturating_sub(1);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }

    /// Adjust the scroll offset so the cursor row is inside a window of `height` rows
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    let mouse = config.ui.mouse;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    info!(mouse, "ui started");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(
        tasks = app.store.len(),
        done = app.store.done_count(),
        "ui stopped"
    );

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
