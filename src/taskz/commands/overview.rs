use crate::error::Result;
use crate::stats::{self, Overview};
use crate::store::DataStore;
use chrono::NaiveDate;

pub fn run<S: DataStore>(store: &S, today: NaiveDate) -> Result<Overview> {
    Ok(stats::overview(&store.load(), today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_due_date;
    use crate::test_utils::seeded_store;

    #[test]
    fn reports_counts_from_the_store() {
        let store = seeded_store(&["A", "B"]);
        let stats = run(&store, parse_due_date("2030-01-01").unwrap()).unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.incomplete, 2);
    }
}
