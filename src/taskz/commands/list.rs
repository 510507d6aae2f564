use crate::error::Result;
use crate::model::Task;
use crate::query::{self, FilterMode, SortMode};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, filter: FilterMode, sort: SortMode) -> Result<Vec<Task>> {
    let tasks = store.load();
    Ok(query::sort(query::filter(tasks, filter), sort))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::complete;
    use crate::test_utils::seeded_store;

    #[test]
    fn filters_then_sorts() {
        let mut store = seeded_store(&["First", "Second"]);
        complete::run(&mut store, 1).unwrap();

        let pending = run(&store, FilterMode::Pending, SortMode::Priority).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "Second");

        let all = run(&store, FilterMode::All, SortMode::Due).unwrap();
        assert_eq!(all.len(), 2);
    }
}
