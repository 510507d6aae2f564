//! # Storage Layer
//!
//! The whole collection is the unit of persistence: every read returns the
//! full task list and every write replaces it. [`DataStore`] abstracts the
//! backend so commands can be tested against [`memory::InMemoryStore`]
//! without touching the filesystem; [`fs::FileStore`] is the production
//! backend over a single JSON file.
//!
//! ## Consistency contract
//!
//! - `load` never fails. A missing, empty, or corrupt store reads as an
//!   empty collection; callers that mutate simply start fresh and overwrite.
//!   The fallback is an explicit branch on [`LoadOutcome`], not a catch-all.
//! - `save` replaces the file atomically from the caller's perspective and
//!   is the one operation whose failure surfaces as a hard error.
//! - There is no cross-process locking. Two concurrent writers race and the
//!   last save wins; the store assumes a single active session.

use crate::error::Result;
use crate::model::Task;

pub mod fs;
pub mod memory;

/// What a raw read of the persisted collection produced, before the
/// empty-collection fallback is applied.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<Task>),
    Missing,
    Corrupt(String),
}

pub trait DataStore {
    /// Read the full collection. Infallible by contract; see module docs.
    fn load(&self) -> Vec<Task>;

    /// Replace the full collection.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}

/// One past the highest id ever assigned in this collection. Ids keep
/// increasing after deletions and are never reused.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}
