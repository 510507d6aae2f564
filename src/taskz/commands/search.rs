use crate::error::Result;
use crate::model::Task;
use crate::query;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, query: &str) -> Result<Vec<Task>> {
    Ok(query::search(store.load(), query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_store;

    #[test]
    fn searches_the_stored_collection() {
        let store = seeded_store(&["Buy groceries", "Call mom"]);
        let found = run(&store, "buy").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Buy groceries");
    }

    #[test]
    fn empty_query_returns_every_task() {
        let store = seeded_store(&["A", "B"]);
        assert_eq!(run(&store, "").unwrap().len(), 2);
    }
}
