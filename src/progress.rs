/// Task progress engine
///
/// Keeps a task's `progress` and `status` consistent with its checklist.
/// Both operations are pure: they take the current task value and return a
/// new one, leaving persistence (and the read-modify-write concurrency it
/// implies) to the calling layer. On any error the input is untouched.
///
/// # Derivation rules
///
/// - `progress = round(100 * completed / total)`, or 0 for an empty
///   checklist (round half up, as in the stored documents).
/// - `status` follows progress: 100 -> Completed, >0 -> In Progress,
///   0 -> Pending.
/// - A direct Completed override cascades one way: every checklist item is
///   forced to completed and progress to 100.
/// - A direct Pending / In Progress override changes only the status label.
///   Progress and checklist keep their values, so the fields can diverge
///   until the next checklist update. This matches how manual overrides
///   have always behaved and callers rely on it.
///
/// # Example
///
/// ```
/// use crewtask_core::models::{ChecklistItem, TaskCompletion, TaskStatus};
/// use crewtask_core::progress::apply_checklist;
///
/// # fn example() -> Result<(), crewtask_core::progress::ProgressError> {
/// let task = TaskCompletion::new();
/// let task = apply_checklist(&task, vec![
///     ChecklistItem { text: "a".to_string(), completed: true },
///     ChecklistItem { text: "b".to_string(), completed: false },
/// ])?;
///
/// assert_eq!(task.progress, 50);
/// assert_eq!(task.status, TaskStatus::InProgress);
/// # Ok(())
/// # }
/// ```

use crate::models::task::{ChecklistItem, TaskCompletion, TaskStatus};
use thiserror::Error;
use validator::Validate;

/// Progress engine errors
#[derive(Error, Debug)]
pub enum ProgressError {
    /// A checklist item failed validation; the task was not modified
    #[error("Invalid checklist item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },
}

/// Replaces the task's checklist and re-derives progress and status
///
/// # Arguments
///
/// * `task` - Current task value (not modified)
/// * `checklist` - Replacement checklist
///
/// # Errors
///
/// Returns `ProgressError::InvalidItem` if any item has empty text. The
/// caller's task value is left unchanged in that case.
pub fn apply_checklist(
    task: &TaskCompletion,
    checklist: Vec<ChecklistItem>,
) -> Result<TaskCompletion, ProgressError> {
    for (index, item) in checklist.iter().enumerate() {
        item.validate().map_err(|e| ProgressError::InvalidItem {
            index,
            reason: e.to_string(),
        })?;
    }

    let progress = derive_progress(&checklist);
    let status = derive_status(progress);

    let mut updated = task.clone();
    updated.checklist = checklist;
    updated.progress = progress;
    updated.status = status;

    Ok(updated)
}

/// Overrides the task's status directly
///
/// Used when a user marks a task done without ticking individual items.
/// `Completed` cascades: every checklist item is forced to completed and
/// progress to 100. `Pending` and `InProgress` set only the status label
/// and deliberately leave progress and checklist alone.
pub fn apply_status(task: &TaskCompletion, status: TaskStatus) -> TaskCompletion {
    let mut updated = task.clone();
    updated.status = status;

    if status == TaskStatus::Completed {
        for item in &mut updated.checklist {
            item.completed = true;
        }
        updated.progress = 100;
    }

    updated
}

/// Percentage of completed items, rounded half up; 0 for an empty checklist
pub fn derive_progress(checklist: &[ChecklistItem]) -> u8 {
    let total = checklist.len();
    if total == 0 {
        return 0;
    }

    let completed = checklist.iter().filter(|item| item.completed).count();
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Status implied by a progress percentage
pub fn derive_status(progress: u8) -> TaskStatus {
    if progress == 100 {
        TaskStatus::Completed
    } else if progress > 0 {
        TaskStatus::InProgress
    } else {
        TaskStatus::Pending
    }
}
