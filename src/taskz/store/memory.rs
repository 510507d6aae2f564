use super::DataStore;
use crate::error::Result;
use crate::model::Task;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    tasks: Vec<Task>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        self.tasks = tasks.to_vec();
        Ok(())
    }
}
