use crate::error::Result;
use crate::store::DataStore;

/// Manually set a task's priority. Unlike `add`, an out-of-range value is
/// rejected rather than normalized: the command reports `false` and leaves
/// the store untouched.
pub fn run<S: DataStore>(store: &mut S, id: u64, priority: i64) -> Result<bool> {
    if !(1..=5).contains(&priority) {
        return Ok(false);
    }

    let mut tasks = store.load();
    let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
        return Ok(false);
    };
    task.priority = priority as u8;
    store.save(&tasks)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_store;

    #[test]
    fn sets_a_valid_priority() {
        let mut store = seeded_store(&["T"]);
        assert!(run(&mut store, 1, 1).unwrap());
        assert_eq!(store.load()[0].priority, 1);
    }

    #[test]
    fn out_of_range_priorities_fail_and_leave_the_value_unchanged() {
        let mut store = seeded_store(&["T"]);

        assert!(!run(&mut store, 1, 0).unwrap());
        assert!(!run(&mut store, 1, 6).unwrap());
        assert_eq!(store.load()[0].priority, 3);
    }

    #[test]
    fn unknown_id_reports_false() {
        let mut store = seeded_store(&["T"]);
        assert!(!run(&mut store, 9, 2).unwrap());
    }
}
