use clap::{Parser, Subcommand, ValueEnum};
use taskz::query::{FilterMode, SortMode};

#[derive(Parser, Debug)]
#[command(name = "taskz")]
#[command(version)]
#[command(about = "Single-file task tracker with optional AI assists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Title of the task
        #[arg(long)]
        title: String,

        /// Detailed description
        #[arg(long, default_value = "")]
        description: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Priority 1 (high) - 5 (low); will prompt if omitted
        #[arg(long)]
        priority: Option<i64>,

        /// Generate an AI summary if possible
        #[arg(long)]
        summarize: bool,

        /// Skip asking for due date/priority; sets no due and priority 3
        #[arg(long)]
        quick: bool,
    },

    /// List tasks
    List {
        /// Filter tasks by status
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortArg::Priority)]
        sort: SortArg,

        /// Display AI-generated summaries (if available)
        #[arg(long)]
        show_summary: bool,
    },

    /// Mark a task complete
    Complete {
        /// Task id
        #[arg(long)]
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task id
        #[arg(long)]
        id: u64,
    },

    /// Search tasks by text
    Search {
        /// Search text
        #[arg(long)]
        query: String,
    },

    /// AI-powered task prioritization
    Prioritize {
        /// Task id
        #[arg(long)]
        id: u64,
    },

    /// Manually set task priority
    SetPriority {
        /// Task id
        #[arg(long)]
        id: u64,

        /// Priority 1-5
        #[arg(long)]
        priority: i64,
    },

    /// Edit an existing task
    Edit {
        /// Task id
        #[arg(long)]
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New due date (YYYY-MM-DD); pass an empty value to clear it
        #[arg(long)]
        due: Option<String>,
    },

    /// Get AI task suggestions
    Suggest {
        /// Optional context for suggestions (e.g. "work project")
        #[arg(long, default_value = "")]
        context: String,
    },

    /// Delete all tasks
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show task statistics
    Overview,

    /// List all available commands
    Options,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FilterArg {
    All,
    Pending,
    Completed,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SortArg {
    Priority,
    Due,
}

impl From<FilterArg> for FilterMode {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => FilterMode::All,
            FilterArg::Pending => FilterMode::Pending,
            FilterArg::Completed => FilterMode::Completed,
        }
    }
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Priority => SortMode::Priority,
            SortArg::Due => SortMode::Due,
        }
    }
}
