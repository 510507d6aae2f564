//! Pure functions over a collection snapshot: filtering, ordering, and
//! ranked search. No I/O happens here; callers pass in whatever the store
//! loaded and decide what to do with the result.

use crate::model::{Task, TaskStatus};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    All,
    Pending,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Priority,
    Due,
}

pub fn filter(tasks: Vec<Task>, mode: FilterMode) -> Vec<Task> {
    match mode {
        FilterMode::All => tasks,
        FilterMode::Pending => tasks.into_iter().filter(|t| t.is_pending()).collect(),
        FilterMode::Completed => tasks
            .into_iter()
            .filter(|t| t.status == TaskStatus::Complete)
            .collect(),
    }
}

/// Stable sort. Priority mode orders by priority (1 first) then due date;
/// due mode orders by due date then priority. Either way a task without a
/// due date sorts after every dated one in its tier.
pub fn sort(mut tasks: Vec<Task>, mode: SortMode) -> Vec<Task> {
    match mode {
        SortMode::Priority => tasks.sort_by_key(|t| (t.priority, due_key(t))),
        SortMode::Due => tasks.sort_by_key(|t| (due_key(t), t.priority)),
    }
    tasks
}

// Dateless tasks compare as the last representable day.
fn due_key(task: &Task) -> NaiveDate {
    task.due_date.unwrap_or(NaiveDate::MAX)
}

/// Two-tier ranked search, case-insensitive. Tier 1: the title starts with
/// the query. Tier 2: any of title, description, or summary contains it.
/// The result is tier 1 then tier 2, each in the collection's original
/// order, with no duplicates.
///
/// An empty query prefix-matches every title and therefore returns the full
/// collection unchanged. That vacuous match is kept on purpose; callers
/// that want "no query, no results" must check before calling.
pub fn search(tasks: Vec<Task>, query: &str) -> Vec<Task> {
    let query = query.to_lowercase();
    let mut prefix_matches = Vec::new();
    let mut other_matches = Vec::new();

    for task in tasks {
        let title = task.title.to_lowercase();
        if title.starts_with(&query) {
            prefix_matches.push(task);
        } else if title.contains(&query)
            || task.description.to_lowercase().contains(&query)
            || task.summary.to_lowercase().contains(&query)
        {
            other_matches.push(task);
        }
    }

    prefix_matches.extend(other_matches);
    prefix_matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_due_date;

    fn task(id: u64, title: &str) -> Task {
        Task::new(id, title.into(), String::new(), None, 3)
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn filter_all_is_identity() {
        let tasks = vec![task(1, "A"), task(2, "B")];
        assert_eq!(filter(tasks.clone(), FilterMode::All), tasks);
    }

    #[test]
    fn filter_splits_on_status() {
        let mut done = task(2, "Done");
        done.status = TaskStatus::Complete;
        let tasks = vec![task(1, "Open"), done];

        assert_eq!(ids(&filter(tasks.clone(), FilterMode::Pending)), [1]);
        assert_eq!(ids(&filter(tasks, FilterMode::Completed)), [2]);
    }

    #[test]
    fn priority_sort_breaks_ties_by_due_date() {
        let mut a = task(1, "A");
        a.priority = 2;
        let mut b = task(2, "B");
        b.priority = 2;
        b.due_date = parse_due_date("2030-01-01");
        let mut c = task(3, "C");
        c.priority = 1;

        // Same priority: dated before dateless. Priority 1 first overall.
        assert_eq!(ids(&sort(vec![a, b, c], SortMode::Priority)), [3, 2, 1]);
    }

    #[test]
    fn due_sort_puts_dateless_last_regardless_of_priority() {
        let mut urgent_dateless = task(1, "Urgent but dateless");
        urgent_dateless.priority = 1;
        let mut low_dated = task(2, "Low but dated");
        low_dated.priority = 5;
        low_dated.due_date = parse_due_date("2099-12-31");

        assert_eq!(
            ids(&sort(vec![urgent_dateless, low_dated], SortMode::Due)),
            [2, 1]
        );
    }

    #[test]
    fn sort_is_stable_within_equal_keys() {
        let tasks = vec![task(1, "First"), task(2, "Second"), task(3, "Third")];
        assert_eq!(ids(&sort(tasks, SortMode::Priority)), [1, 2, 3]);
    }

    #[test]
    fn search_ranks_title_prefixes_before_substring_hits() {
        let brush = task(1, "Brush teeth");
        let mut laundry = task(2, "Do laundry");
        laundry.description = "Buy bleach".into();
        let groceries = task(3, "Buy groceries");
        let birthday = task(4, "Remember birthday");

        let result = search(vec![brush, laundry, groceries, birthday], "b");
        assert_eq!(ids(&result), [1, 3, 2, 4]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let result = search(vec![task(1, "Email Alice")], "EMAIL");
        assert_eq!(ids(&result), [1]);
    }

    #[test]
    fn search_matches_summaries() {
        let mut t = task(1, "Untitledish");
        t.summary = "Quarterly budget review".into();
        assert_eq!(ids(&search(vec![t], "budget")), [1]);
    }

    #[test]
    fn empty_query_returns_everything_in_original_order() {
        let tasks = vec![task(3, "C"), task(1, "A"), task(2, "B")];
        assert_eq!(ids(&search(tasks, "")), [3, 1, 2]);
    }

    #[test]
    fn prefix_match_is_not_duplicated_into_tier_two() {
        let mut t = task(1, "Buy milk");
        t.description = "buy it today".into();
        assert_eq!(search(vec![t], "buy").len(), 1);
    }
}
