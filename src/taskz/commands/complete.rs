use crate::error::Result;
use crate::model::TaskStatus;
use crate::store::DataStore;

/// Mark a task complete. Idempotent: completing an already-complete task
/// reports `true` again. `false` only when the id is unknown.
pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<bool> {
    let mut tasks = store.load();
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.status = TaskStatus::Complete;
            store.save(&tasks)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::seeded_store;

    #[test]
    fn completes_a_pending_task() {
        let mut store = seeded_store(&["Feed the cat"]);
        assert!(run(&mut store, 1).unwrap());
        assert_eq!(store.load()[0].status, TaskStatus::Complete);
    }

    #[test]
    fn completing_twice_reports_true_both_times() {
        let mut store = seeded_store(&["Feed the cat"]);
        assert!(run(&mut store, 1).unwrap());
        assert!(run(&mut store, 1).unwrap());
        assert_eq!(store.load()[0].status, TaskStatus::Complete);
    }

    #[test]
    fn unknown_id_reports_false() {
        let mut store = InMemoryStore::new();
        assert!(!run(&mut store, 99).unwrap());
    }
}
