//! Optional text-generation assists.
//!
//! [`Assistant`] is the only surface the command layer knows about; the
//! OpenAI-backed implementation lives in [`openai`]. Every method is
//! fallible, and `is_available` lets callers skip the request entirely when
//! credentials are missing — commands turn both cases into placeholder
//! values, never into errors of their own.

use chrono::NaiveDate;
use thiserror::Error;

pub mod openai;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unusable reply: {0}")]
    Malformed(String),
}

/// A priority verdict, already normalized into the 1-5 range.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub priority: u8,
    pub rationale: String,
}

/// What a pending task looks like when handed over as suggestion context.
#[derive(Debug, Clone)]
pub struct TaskBrief {
    pub title: String,
    pub description: String,
}

pub trait Assistant {
    /// Whether calls have any chance of succeeding (credentials present).
    /// Checked up front so unavailable backends are never even contacted.
    fn is_available(&self) -> bool;

    /// Best-effort one-line summary of a task.
    fn summarize(&self, title: &str, description: &str) -> Result<String, AssistantError>;

    /// Judge how urgent a task is.
    fn assess_priority(
        &self,
        title: &str,
        description: &str,
        due_date: Option<NaiveDate>,
    ) -> Result<Assessment, AssistantError>;

    /// Propose new tasks given existing pending ones and free-text context.
    fn suggest(&self, pending: &[TaskBrief], context: &str)
        -> Result<Vec<String>, AssistantError>;
}
