//! Console seam between the menu session and the terminal

use std::collections::VecDeque;
use std::io;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::render::{self, Level};

/// Outcome of reading one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine {
    /// A line was read
    Line(String),
    /// Ctrl-C: abandon the current operation
    Interrupted,
    /// Ctrl-D or closed stream: end the session
    Eof,
}

/// Where menu input comes from and where rendered output goes
pub trait Console {
    /// Clear the screen before redrawing a view
    fn clear(&mut self);

    /// Print a plain line
    fn print(&mut self, text: &str);

    /// Print a line at a semantic level
    fn print_level(&mut self, text: &str, level: Level);

    /// Prompt for and read one line
    fn read_line(&mut self, prompt: &str) -> Result<ReadLine>;
}

/// Real terminal console: rustyline input, painted output
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self { editor })
    }
}

impl Console for Terminal {
    fn clear(&mut self) {
        // Non-tty output just carries the escape codes through
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn print_level(&mut self, text: &str, level: Level) {
        println!("{}", render::paint(text, level));
    }

    fn read_line(&mut self, prompt: &str) -> Result<ReadLine> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(ReadLine::Line(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Ok(ReadLine::Interrupted)
            }
            Err(ReadlineError::Eof) => {
                println!();
                Ok(ReadLine::Eof)
            }
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}

/// Scripted console for driving a session without a terminal
///
/// Input lines are consumed front to back; everything printed (prompts
/// included) lands in the transcript. Reading past the end of the script
/// yields [`ReadLine::Eof`].
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything the session printed, in order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any transcript entry contains the fragment
    pub fn printed(&self, fragment: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(fragment))
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) {}

    fn print(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn print_level(&mut self, text: &str, _level: Level) {
        self.transcript.push(text.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Result<ReadLine> {
        self.transcript.push(prompt.to_string());
        match self.lines.pop_front() {
            Some(line) => Ok(ReadLine::Line(line)),
            None => Ok(ReadLine::Eof),
        }
    }
}
