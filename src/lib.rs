//! taskdesk - interactive in-memory task manager
//!
//! Maintains a list of tasks (add, list, complete, remove, summarize) for the
//! duration of one run. All state lives in process memory and is discarded on
//! exit; the only external surface is the interactive console.
//!
//! # Architecture
//!
//! ```text
//! TaskStore          ordered records + sequential id assignment
//! menu::MenuSession  state machine driving the six menu operations
//! menu::Console      seam between the session and the terminal (or a test)
//! render             semantic formatting, no raw color codes elsewhere
//! ```
//!
//! # Example
//!
//! ```ignore
//! use taskdesk::TaskStore;
//!
//! let mut store = TaskStore::new();
//! let due = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! store.add("Buy milk", "Personal", due);
//! store.complete(1)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod render;
mod store;

pub use error::{InputError, StoreError};
pub use render::Level;
pub use store::{Summary, Task, TaskId, TaskStore};

/// Default due-date input/display format
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
