use crate::error::Result;
use crate::store::DataStore;

/// Remove a task. Reports whether anything was actually removed.
pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<bool> {
    let mut tasks = store.load();
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    if tasks.len() == before {
        return Ok(false);
    }
    store.save(&tasks)?;
    Ok(true)
}
