//! Menu session state machine

use chrono::NaiveDate;
use eyre::Result;
use log::debug;

use super::console::{Console, ReadLine};
use crate::config::Config;
use crate::error::InputError;
use crate::render::{self, Level};
use crate::store::{TaskId, TaskStore};

/// Control-flow states of the command loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// The menu is about to be rendered
    MenuDisplayed,
    /// Blocked on a selection token
    AwaitingInput,
    /// Running one operation to completion
    Executing,
    /// Exit selected; the loop will not run again
    Terminated,
}

/// The six menu operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Add,
    List,
    Complete,
    Remove,
    Summary,
    Exit,
}

impl Selection {
    fn parse(token: &str) -> Result<Self, InputError> {
        match token.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::List),
            "3" => Ok(Self::Complete),
            "4" => Ok(Self::Remove),
            "5" => Ok(Self::Summary),
            "6" => Ok(Self::Exit),
            other => Err(InputError::InvalidSelection {
                input: other.to_string(),
            }),
        }
    }
}

/// What the loop does after one operation
enum Flow {
    Continue,
    Quit,
}

/// Interactive menu session over a console
///
/// Owns the [`TaskStore`] for the lifetime of the run; nothing outlives the
/// session.
pub struct MenuSession<C: Console> {
    console: C,
    store: TaskStore,
    config: Config,
    state: MenuState,
}

impl<C: Console> MenuSession<C> {
    pub fn new(console: C, config: Config) -> Self {
        Self {
            console,
            store: TaskStore::new(),
            config,
            state: MenuState::MenuDisplayed,
        }
    }

    /// Current control-flow state
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The store driven by this session
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// The console, with whatever it captured
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run the command loop until exit
    pub fn run(&mut self) -> Result<()> {
        while self.state != MenuState::Terminated {
            self.console.clear();
            self.print_menu();

            self.state = MenuState::AwaitingInput;
            let token = match self.console.read_line("\nChoose an option: ")? {
                ReadLine::Line(line) => line,
                ReadLine::Interrupted => {
                    self.state = MenuState::MenuDisplayed;
                    continue;
                }
                ReadLine::Eof => {
                    self.state = MenuState::Terminated;
                    break;
                }
            };

            self.state = MenuState::Executing;
            let flow = match Selection::parse(&token) {
                Ok(selection) => self.execute(selection)?,
                Err(err) => {
                    self.console.print_level(&err.to_string(), Level::Error);
                    self.pause()?;
                    Flow::Continue
                }
            };

            self.state = match flow {
                Flow::Continue => MenuState::MenuDisplayed,
                Flow::Quit => MenuState::Terminated,
            };
        }

        Ok(())
    }

    fn print_menu(&mut self) {
        self.console.print_level("=== Task Manager ===", Level::Title);
        self.console.print("1. Add Task");
        self.console.print("2. List Tasks");
        self.console.print("3. Complete Task");
        self.console.print("4. Remove Task");
        self.console.print("5. Summary");
        self.console.print("6. Exit");
    }

    fn execute(&mut self, selection: Selection) -> Result<Flow> {
        debug!("executing {:?}", selection);

        match selection {
            Selection::Add => self.op_add()?,
            Selection::List => self.op_list()?,
            Selection::Complete => self.op_complete()?,
            Selection::Remove => self.op_remove()?,
            Selection::Summary => self.op_summary()?,
            Selection::Exit => {
                self.console.print_level("Thanks for using taskdesk!", Level::Success);
                return Ok(Flow::Quit);
            }
        }

        self.pause()?;
        Ok(Flow::Continue)
    }

    fn op_add(&mut self) -> Result<()> {
        self.console.clear();
        self.console.print_level("=== Add New Task ===", Level::Title);

        let Some(name) = self.ask("Task name: ")? else {
            return Ok(());
        };
        let Some(category) = self.ask("Category: ")? else {
            return Ok(());
        };

        let date_prompt = format!("Due date ({}): ", self.config.date_hint());
        let Some(raw) = self.ask(&date_prompt)? else {
            return Ok(());
        };

        match parse_date(&raw, &self.config.date_format) {
            Ok(due) => {
                let task = self.store.add(name, category, due);
                let line = format!("Task '{}' added with id {}.", task.name, task.id);
                self.console.print_level(&line, Level::Success);
            }
            Err(err) => {
                self.console.print_level(&err.to_string(), Level::Error);
            }
        }

        Ok(())
    }

    fn op_list(&mut self) -> Result<()> {
        self.console.clear();
        self.console.print_level("=== Task List ===", Level::Title);
        self.render_tasks();
        Ok(())
    }

    fn op_complete(&mut self) -> Result<()> {
        self.console.clear();
        self.console.print_level("=== Complete Task ===", Level::Title);
        self.render_tasks();

        let Some(id) = self.ask_id("\nId of the task to complete: ")? else {
            return Ok(());
        };

        match self.store.complete(id) {
            Ok(task) => {
                let line = format!("Task '{}' completed.", task.name);
                self.console.print_level(&line, Level::Success);
            }
            Err(err) => {
                self.console.print_level(&err.to_string(), Level::Error);
            }
        }

        Ok(())
    }

    fn op_remove(&mut self) -> Result<()> {
        self.console.clear();
        self.console.print_level("=== Remove Task ===", Level::Title);
        self.render_tasks();

        let Some(id) = self.ask_id("\nId of the task to remove: ")? else {
            return Ok(());
        };

        match self.store.remove(id) {
            Ok(task) => {
                let line = format!("Task '{}' removed.", task.name);
                self.console.print_level(&line, Level::Success);
            }
            Err(err) => {
                self.console.print_level(&err.to_string(), Level::Error);
            }
        }

        Ok(())
    }

    fn op_summary(&mut self) -> Result<()> {
        self.console.clear();
        self.console.print_level("=== Task Summary ===", Level::Title);

        let summary = self.store.summary();
        let completed = format!("Completed tasks: {}", summary.completed);
        let pending = format!("Pending tasks: {}", summary.pending);
        self.console.print_level(&completed, Level::Success);
        self.console.print_level(&pending, Level::Warning);

        Ok(())
    }

    /// Render the current task list, or a notice when empty
    fn render_tasks(&mut self) {
        if self.store.is_empty() {
            self.console.print_level("No tasks recorded.", Level::Warning);
            return;
        }

        for task in self.store.tasks() {
            let line = render::task_line(task, &self.config.date_format);
            self.console.print(&line);
        }
    }

    /// Read one answer for an in-operation prompt
    ///
    /// `None` means the operation was abandoned (Ctrl-C or end of input);
    /// the caller aborts without touching the store.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.console.read_line(prompt)? {
            ReadLine::Line(line) => Ok(Some(line.trim().to_string())),
            ReadLine::Interrupted | ReadLine::Eof => Ok(None),
        }
    }

    /// Prompt for a task id; reports a parse failure and aborts on bad input
    fn ask_id(&mut self, prompt: &str) -> Result<Option<TaskId>> {
        let Some(raw) = self.ask(prompt)? else {
            return Ok(None);
        };

        match parse_id(&raw) {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                self.console.print_level(&err.to_string(), Level::Error);
                Ok(None)
            }
        }
    }

    fn pause(&mut self) -> Result<()> {
        let _ = self.console.read_line("\nPress Enter to return to the menu...")?;
        Ok(())
    }
}

/// Parse a task id from user input
fn parse_id(input: &str) -> Result<TaskId, InputError> {
    input.trim().parse().map_err(|_| InputError::InvalidId {
        input: input.trim().to_string(),
    })
}

/// Parse a due date from user input with the configured format
fn parse_date(input: &str, format: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input.trim(), format).map_err(|_| InputError::InvalidDate {
        input: input.trim().to_string(),
        format: format.to_string(),
    })
}
