use crate::error::Result;
use crate::store::DataStore;

/// Empty the collection, reporting how many tasks were removed. Asking the
/// user whether they really meant it is the caller's job.
pub fn run<S: DataStore>(store: &mut S) -> Result<usize> {
    let tasks = store.load();
    let count = tasks.len();
    if count > 0 {
        store.save(&[])?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::seeded_store;

    #[test]
    fn clears_everything_and_reports_the_count() {
        let mut store = seeded_store(&["A", "B", "C"]);
        assert_eq!(run(&mut store).unwrap(), 3);
        assert!(store.load().is_empty());
    }

    #[test]
    fn clearing_an_empty_store_reports_zero() {
        let mut store = InMemoryStore::new();
        assert_eq!(run(&mut store).unwrap(), 0);
    }
}
