use crate::error::Result;
use crate::model;
use crate::store::DataStore;

/// Per-field edit; `None` leaves a field untouched. For the due date,
/// `Some("")` clears it, and a value that does not parse as a calendar
/// date is silently ignored, keeping whatever was there before.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

pub fn run<S: DataStore>(store: &mut S, id: u64, edit: TaskEdit) -> Result<bool> {
    let mut tasks = store.load();
    let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
        return Ok(false);
    };

    if let Some(title) = edit.title {
        task.title = title;
    }
    if let Some(description) = edit.description {
        task.description = description;
    }
    match edit.due_date.as_deref() {
        None => {}
        Some("") => task.due_date = None,
        Some(raw) => {
            if let Some(date) = model::parse_due_date(raw) {
                task.due_date = Some(date);
            }
        }
    }

    store.save(&tasks)?;
    Ok(true)
}
