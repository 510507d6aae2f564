use crate::ai::Assistant;
use crate::error::{Result, TaskzError};
use crate::model::{self, Task};
use crate::store::{next_id, DataStore};
use log::warn;

/// Input for a new task, before validation. Bad values are normalized, not
/// rejected: an unparseable due date is dropped and a missing or
/// out-of-range priority falls back to 3.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    pub priority: Option<i64>,
    pub summarize: bool,
}

pub fn run<S: DataStore, A: Assistant>(
    store: &mut S,
    assistant: &A,
    new: NewTask,
) -> Result<Task> {
    if new.title.trim().is_empty() {
        return Err(TaskzError::InvalidInput("title cannot be empty".into()));
    }

    let mut tasks = store.load();
    let mut task = Task::new(
        next_id(&tasks),
        new.title,
        new.description,
        new.due_date.as_deref().and_then(model::parse_due_date),
        new.priority
            .map_or(model::DEFAULT_PRIORITY, model::normalize_priority),
    );

    if new.summarize {
        task.summary = summary_or_placeholder(assistant, &task);
    }

    tasks.push(task.clone());
    store.save(&tasks)?;
    Ok(task)
}

// A failed or unavailable assistant never blocks creation; the summary
// field records what happened instead.
fn summary_or_placeholder<A: Assistant>(assistant: &A, task: &Task) -> String {
    if !assistant.is_available() {
        return "(Summary unavailable: OpenAI API key not set)".to_string();
    }
    match assistant.summarize(&task.title, &task.description) {
        Ok(summary) => summary,
        Err(e) => {
            warn!("summary request failed: {e}");
            format!("(Summary error: {e})")
        }
    }
}
