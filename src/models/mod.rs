/// Domain models for CrewTask
///
/// Only the slice of a task document this crate derives is modeled here:
/// status, progress percentage, and the checklist they are computed from.
/// Every other task attribute (title, assignees, due date, priority,
/// attachments) is opaque to this core and owned by the persistence layer.
pub mod task;

pub use task::{ChecklistItem, TaskCompletion, TaskStatus};
