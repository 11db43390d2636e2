//! Core TaskStore implementation

use chrono::NaiveDate;
use log::debug;

use crate::error::StoreError;

/// Unique identifier for a task, assigned sequentially starting at 1
pub type TaskId = u32;

/// A single tracked task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique id, immutable once assigned
    pub id: TaskId,
    /// Task name
    pub name: String,
    /// Free-text category
    pub category: String,
    /// Due date
    pub due: NaiveDate,
    /// Whether the task has been completed
    pub completed: bool,
}

/// Completed/pending counts for a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Tasks with `completed == true`
    pub completed: usize,
    /// Everything else
    pub pending: usize,
}

/// The in-memory task collection
///
/// Owns every record. Insertion order is preserved and ids are never reused
/// within one store's lifetime.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a task, assigning the next sequential id
    ///
    /// Inputs are assumed pre-validated by the caller; there is no failure
    /// condition.
    pub fn add(&mut self, name: impl Into<String>, category: impl Into<String>, due: NaiveDate) -> &Task {
        let id = self.next_id;
        self.next_id += 1;

        let idx = self.tasks.len();
        self.tasks.push(Task {
            id,
            name: name.into(),
            category: category.into(),
            due,
            completed: false,
        });

        debug!("added task {}", id);
        &self.tasks[idx]
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Mark a task as completed
    ///
    /// Idempotent: completing an already-completed task leaves it completed.
    pub fn complete(&mut self, id: TaskId) -> Result<&Task, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound { id })?;

        task.completed = true;
        debug!("completed task {}", id);
        Ok(task)
    }

    /// Remove a task, returning the deleted record
    pub fn remove(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound { id })?;

        debug!("removed task {}", id);
        Ok(self.tasks.remove(idx))
    }

    /// Completed/pending counts
    pub fn summary(&self) -> Summary {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Summary {
            completed,
            pending: self.tasks.len() - completed,
        }
    }

    /// Number of tasks in the store
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
