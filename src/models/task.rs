/// Task completion model
///
/// A task's lifecycle status is derived from its checklist: progress is the
/// rounded percentage of completed items, and status follows progress.
///
/// # State Machine
///
/// ```text
/// Pending ──(first item completed)──> In Progress ──(all items)──> Completed
///    ▲                                    ▲
///    └──(items unchecked again)───────────┘
/// ```
///
/// Unlike a one-way workflow, status moves freely in both directions as the
/// checklist changes; only a direct Completed override cascades into the
/// checklist itself (see the `progress` module).
///
/// # Document shape
///
/// Task documents persist these fields verbatim:
///
/// ```json
/// {
///   "status": "In Progress",
///   "progress": 50,
///   "checklist": [
///     { "text": "a", "completed": true },
///     { "text": "b", "completed": false }
///   ]
/// }
/// ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Task lifecycle status
///
/// Wire strings match the stored documents: "Pending", "In Progress",
/// "Completed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// No checklist item completed yet
    Pending,

    /// At least one item completed, but not all
    #[serde(rename = "In Progress")]
    InProgress,

    /// Every item completed, or manually marked done
    Completed,
}

impl TaskStatus {
    /// Converts status to its stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Checks whether the task is done
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

/// A sub-task contributing to the task's computed progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ChecklistItem {
    /// Label shown to the user
    #[validate(length(min = 1, message = "checklist item text must not be empty"))]
    pub text: String,

    /// Completion flag
    pub completed: bool,
}

impl ChecklistItem {
    /// Creates a new, not-yet-completed item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// The derived slice of a task document
///
/// Holds exactly the fields the progress engine owns. The invariant
/// `progress == round(100 * completed / total)` (0 for an empty checklist)
/// holds after every `apply_checklist`; a direct non-Completed status
/// override may leave status and progress diverged until the next checklist
/// update, which is accepted behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCompletion {
    /// Current lifecycle status
    pub status: TaskStatus,

    /// Completion percentage, 0-100
    pub progress: u8,

    /// Ordered checklist the progress is derived from
    pub checklist: Vec<ChecklistItem>,
}

impl TaskCompletion {
    /// Creates a fresh task slice: empty checklist, Pending, 0%
    pub fn new() -> Self {
        Self {
            status: TaskStatus::Pending,
            progress: 0,
            checklist: Vec::new(),
        }
    }

    /// Number of completed checklist items
    pub fn completed_count(&self) -> usize {
        self.checklist.iter().filter(|item| item.completed).count()
    }

    /// Total number of checklist items
    pub fn total_count(&self) -> usize {
        self.checklist.len()
    }
}

impl Default for TaskCompletion {
    fn default() -> Self {
        Self::new()
    }
}
