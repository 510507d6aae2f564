//! # API Facade
//!
//! A thin entry point over the command layer: it dispatches, it does not
//! decide. Business rules live in `commands/*.rs`, persistence in `store`,
//! and no I/O formatting happens on this side of the boundary.
//!
//! `TaskzApi<S, A>` is generic over the storage backend and the assistant,
//! so production runs `TaskzApi<FileStore, OpenAiAssistant>` while tests
//! pair `InMemoryStore` with a scripted assistant and never touch the
//! filesystem or the network.

use crate::ai::Assistant;
use crate::commands;
use crate::error::Result;
use crate::model::Task;
use crate::query::{FilterMode, SortMode};
use crate::stats::Overview;
use crate::store::DataStore;
use chrono::NaiveDate;

pub struct TaskzApi<S: DataStore, A: Assistant> {
    store: S,
    assistant: A,
}

impl<S: DataStore, A: Assistant> TaskzApi<S, A> {
    pub fn new(store: S, assistant: A) -> Self {
        Self { store, assistant }
    }

    pub fn add(&mut self, new: NewTask) -> Result<Task> {
        commands::add::run(&mut self.store, &self.assistant, new)
    }

    pub fn list(&self, filter: FilterMode, sort: SortMode) -> Result<Vec<Task>> {
        commands::list::run(&self.store, filter, sort)
    }

    pub fn search(&self, query: &str) -> Result<Vec<Task>> {
        commands::search::run(&self.store, query)
    }

    pub fn complete(&mut self, id: u64) -> Result<bool> {
        commands::complete::run(&mut self.store, id)
    }

    pub fn delete(&mut self, id: u64) -> Result<bool> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn edit(&mut self, id: u64, edit: TaskEdit) -> Result<bool> {
        commands::edit::run(&mut self.store, id, edit)
    }

    pub fn set_priority(&mut self, id: u64, priority: i64) -> Result<bool> {
        commands::set_priority::run(&mut self.store, id, priority)
    }

    pub fn prioritize(&mut self, id: u64) -> Result<Option<Prioritized>> {
        commands::prioritize::run(&mut self.store, &self.assistant, id)
    }

    pub fn suggest(&self, context: &str) -> Result<Suggestions> {
        commands::suggest::run(&self.store, &self.assistant, context)
    }

    pub fn clear(&mut self) -> Result<usize> {
        commands::clear::run(&mut self.store)
    }

    pub fn overview(&self, today: NaiveDate) -> Result<Overview> {
        commands::overview::run(&self.store, today)
    }
}

pub use crate::commands::add::NewTask;
pub use crate::commands::edit::TaskEdit;
pub use crate::commands::prioritize::Prioritized;
pub use crate::commands::suggest::Suggestions;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::ScriptedAssistant;

    fn offline_api() -> TaskzApi<InMemoryStore, ScriptedAssistant> {
        TaskzApi::new(InMemoryStore::new(), ScriptedAssistant::unavailable())
    }

    #[test]
    fn dispatches_through_the_command_layer() {
        let mut api = offline_api();
        let task = api
            .add(NewTask {
                title: "Wire the API".into(),
                ..NewTask::default()
            })
            .unwrap();

        assert_eq!(task.id, 1);
        assert!(api.complete(task.id).unwrap());
        assert_eq!(api.list(FilterMode::Completed, SortMode::Priority).unwrap().len(), 1);
        assert!(api.delete(task.id).unwrap());
        assert_eq!(api.clear().unwrap(), 0);
    }
}
