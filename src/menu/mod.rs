//! Interactive menu session
//!
//! The command loop: renders the six menu operations, reads selections, and
//! drives the [`TaskStore`](crate::TaskStore). The session is generic over
//! [`Console`] so tests can inject input and capture output without a
//! terminal.

mod console;
mod session;

pub use console::{Console, ReadLine, ScriptedConsole, Terminal};
pub use session::{MenuSession, MenuState};

use eyre::Result;

use crate::config::Config;

/// Run the interactive menu on the real terminal
///
/// This is the main entry point for `tsk`.
pub fn run_interactive(config: &Config) -> Result<()> {
    let console = Terminal::new()?;
    let mut session = MenuSession::new(console, config.clone());
    session.run()
}
