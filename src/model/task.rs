use std::fmt;

use serde::{Deserialize, Serialize};

use super::member::MemberId;

/// Stable numeric task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task assigned to a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    /// May name a member that doesn't exist; such a task has no visible owner.
    pub assigned_to: MemberId,
}

impl Task {
    pub fn new(id: u32, title: impl Into<String>, done: bool, assigned_to: u32) -> Self {
        Task {
            id: TaskId(id),
            title: title.into(),
            done,
            assigned_to: MemberId(assigned_to),
        }
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}
