use crate::ai::Assistant;
use crate::error::Result;
use crate::store::DataStore;
use log::warn;

/// The persisted outcome of an assistant priority assessment.
#[derive(Debug, Clone)]
pub struct Prioritized {
    pub priority: u8,
    pub rationale: String,
}

/// Ask the assistant to judge a task's urgency and persist the verdict.
/// `None` when the assistant is unavailable, the id is unknown, or the
/// request fails — none of those are errors here.
pub fn run<S: DataStore, A: Assistant>(
    store: &mut S,
    assistant: &A,
    id: u64,
) -> Result<Option<Prioritized>> {
    if !assistant.is_available() {
        return Ok(None);
    }

    let mut tasks = store.load();
    let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
        return Ok(None);
    };

    let assessment =
        match assistant.assess_priority(&task.title, &task.description, task.due_date) {
            Ok(assessment) => assessment,
            Err(e) => {
                warn!("priority assessment failed: {e}");
                return Ok(None);
            }
        };

    task.priority = assessment.priority;
    store.save(&tasks)?;
    Ok(Some(Prioritized {
        priority: assessment.priority,
        rationale: assessment.rationale,
    }))
}
