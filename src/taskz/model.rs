use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Fallback whenever a priority is missing, unparseable, or out of range.
pub const DEFAULT_PRIORITY: u8 = 3;

/// The only accepted due date shape.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Complete,
}

/// One task entry. The collection on disk is a JSON array of these, in
/// insertion order; `due_date: None` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<NaiveDate>,
    pub priority: u8,
    pub status: TaskStatus,
    pub summary: String,
}

impl Task {
    /// Builds a pending task. `id` is the caller's responsibility (see
    /// [`crate::store::next_id`]); the creation timestamp is truncated to
    /// whole seconds and never changes afterwards.
    pub fn new(
        id: u64,
        title: String,
        description: String,
        due_date: Option<NaiveDate>,
        priority: u8,
    ) -> Self {
        Self {
            id,
            title,
            description,
            created_at: Utc::now().trunc_subsecs(0),
            due_date,
            priority,
            status: TaskStatus::Pending,
            summary: String::new(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }
}

/// Clamp-to-default validation: anything outside 1-5 becomes 3.
pub fn normalize_priority(priority: i64) -> u8 {
    if (1..=5).contains(&priority) {
        priority as u8
    } else {
        DEFAULT_PRIORITY
    }
}

/// A value that does not parse as `YYYY-MM-DD` is treated as absent.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT).ok()
}
