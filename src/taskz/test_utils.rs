//! Shared fixtures: quick store seeding and a canned assistant. Compiled
//! only for tests or behind the `test_utils` feature.

use crate::ai::{Assessment, Assistant, AssistantError, TaskBrief};
use crate::model::Task;
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use chrono::NaiveDate;
use std::cell::RefCell;

/// An in-memory store holding pending tasks with the given titles, ids
/// assigned from 1 in order.
pub fn seeded_store(titles: &[&str]) -> InMemoryStore {
    let tasks: Vec<Task> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| Task::new(i as u64 + 1, (*title).to_string(), String::new(), None, 3))
        .collect();

    let mut store = InMemoryStore::new();
    store.save(&tasks).unwrap();
    store
}

/// An [`Assistant`] driven by canned replies. A method with no canned value
/// fails, so error paths are scripted by omission. `suggest` calls are
/// recorded for assertions on what context was handed over.
pub struct ScriptedAssistant {
    available: bool,
    summary: Option<String>,
    assessment: Option<Assessment>,
    suggestions: Option<Vec<String>>,
    suggest_calls: RefCell<Vec<(Vec<TaskBrief>, String)>>,
}

impl ScriptedAssistant {
    fn scripted(
        summary: Option<String>,
        assessment: Option<Assessment>,
        suggestions: Option<Vec<String>>,
    ) -> Self {
        Self {
            available: true,
            summary,
            assessment,
            suggestions,
            suggest_calls: RefCell::new(Vec::new()),
        }
    }

    /// No credentials: `is_available` is false and no method may be called.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::scripted(None, None, None)
        }
    }

    /// Available, but every request fails.
    pub fn failing() -> Self {
        Self::scripted(None, None, None)
    }

    pub fn with_summary(text: &str) -> Self {
        Self::scripted(Some(text.to_string()), None, None)
    }

    pub fn with_assessment(priority: u8, rationale: &str) -> Self {
        Self::scripted(
            None,
            Some(Assessment {
                priority,
                rationale: rationale.to_string(),
            }),
            None,
        )
    }

    pub fn with_suggestions(lines: &[&str]) -> Self {
        Self::scripted(None, None, Some(lines.iter().map(|l| l.to_string()).collect()))
    }

    /// Succeeds with a throwaway suggestion and records what it was asked.
    pub fn recording() -> Self {
        Self::with_suggestions(&["Recorded"])
    }

    pub fn last_suggest_call(&self) -> Option<(Vec<TaskBrief>, String)> {
        self.suggest_calls.borrow().last().cloned()
    }
}

impl Assistant for ScriptedAssistant {
    fn is_available(&self) -> bool {
        self.available
    }

    fn summarize(&self, _title: &str, _description: &str) -> Result<String, AssistantError> {
        self.summary
            .clone()
            .ok_or_else(|| AssistantError::Transport("scripted failure".into()))
    }

    fn assess_priority(
        &self,
        _title: &str,
        _description: &str,
        _due_date: Option<NaiveDate>,
    ) -> Result<Assessment, AssistantError> {
        self.assessment
            .clone()
            .ok_or_else(|| AssistantError::Transport("scripted failure".into()))
    }

    fn suggest(
        &self,
        pending: &[TaskBrief],
        context: &str,
    ) -> Result<Vec<String>, AssistantError> {
        self.suggest_calls
            .borrow_mut()
            .push((pending.to_vec(), context.to_string()));
        self.suggestions
            .clone()
            .ok_or_else(|| AssistantError::Transport("scripted failure".into()))
    }
}
