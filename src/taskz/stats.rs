//! Derived statistics over a collection snapshot.

use crate::model::Task;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overview {
    pub total: usize,
    pub incomplete: usize,
    pub high_priority: usize,
    pub overdue: usize,
}

/// Aggregate counts. `today` is the UTC calendar date; the overdue check
/// compares dates only, no time of day. Only pending tasks count towards
/// `high_priority` (priority 1 or 2) and `overdue`; tasks without a due
/// date are never overdue.
pub fn overview(tasks: &[Task], today: NaiveDate) -> Overview {
    let mut stats = Overview {
        total: tasks.len(),
        ..Default::default()
    };

    for task in tasks {
        if !task.is_pending() {
            continue;
        }
        stats.incomplete += 1;
        if task.priority <= 2 {
            stats.high_priority += 1;
        }
        if task.due_date.is_some_and(|due| due < today) {
            stats.overdue += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_due_date, Task, TaskStatus};

    fn today() -> NaiveDate {
        parse_due_date("2030-06-15").unwrap()
    }

    #[test]
    fn empty_collection_is_all_zeroes() {
        assert_eq!(overview(&[], today()), Overview::default());
    }

    #[test]
    fn counts_overdue_high_priority_and_incomplete() {
        let overdue = Task::new(
            1,
            "File expenses".into(),
            String::new(),
            parse_due_date("2030-06-01"),
            4,
        );
        let urgent = Task::new(2, "Call landlord".into(), String::new(), None, 1);
        let mut done = Task::new(3, "Book flights".into(), String::new(), None, 3);
        done.status = TaskStatus::Complete;

        let stats = overview(&[overdue, urgent, done], today());
        assert_eq!(
            stats,
            Overview {
                total: 3,
                incomplete: 2,
                high_priority: 1,
                overdue: 1,
            }
        );
    }

    #[test]
    fn due_today_is_not_overdue() {
        let due_today = Task::new(1, "T".into(), String::new(), Some(today()), 3);
        assert_eq!(overview(&[due_today], today()).overdue, 0);
    }

    #[test]
    fn completed_tasks_never_count_as_overdue_or_high_priority() {
        let mut done = Task::new(
            1,
            "Old".into(),
            String::new(),
            parse_due_date("2020-01-01"),
            1,
        );
        done.status = TaskStatus::Complete;

        let stats = overview(&[done], today());
        assert_eq!(stats.overdue, 0);
        assert_eq!(stats.high_priority, 0);
        assert_eq!(stats.incomplete, 0);
    }
}
