use chrono::Utc;
use clap::Parser;
use colored::*;
use log::debug;
use std::io::{self, Write};

use taskz::ai::openai::OpenAiAssistant;
use taskz::api::{NewTask, TaskEdit, TaskzApi};
use taskz::config::TaskzConfig;
use taskz::error::Result;
use taskz::model::{Task, TaskStatus};
use taskz::store::fs::FileStore;

mod args;
use args::{Cli, Commands, FilterArg, SortArg};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TaskzApi<FileStore, OpenAiAssistant>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = TaskzConfig::from_env();
    debug!("store file: {}", config.data_file.display());

    let store = FileStore::new(&config.data_file);
    let assistant = OpenAiAssistant::new(config.api_key);
    let mut ctx = AppContext {
        api: TaskzApi::new(store, assistant),
    };

    match cli.command {
        Commands::Add {
            title,
            description,
            due,
            priority,
            summarize,
            quick,
        } => handle_add(&mut ctx, title, description, due, priority, summarize, quick),
        Commands::List {
            filter,
            sort,
            show_summary,
        } => handle_list(&ctx, filter, sort, show_summary),
        Commands::Complete { id } => handle_complete(&mut ctx, id),
        Commands::Delete { id } => handle_delete(&mut ctx, id),
        Commands::Search { query } => handle_search(&ctx, query),
        Commands::Prioritize { id } => handle_prioritize(&mut ctx, id),
        Commands::SetPriority { id, priority } => handle_set_priority(&mut ctx, id, priority),
        Commands::Edit {
            id,
            title,
            description,
            due,
        } => handle_edit(&mut ctx, id, title, description, due),
        Commands::Suggest { context } => handle_suggest(&ctx, context),
        Commands::Clear { yes } => handle_clear(&mut ctx, yes),
        Commands::Overview => handle_overview(&ctx),
        Commands::Options => handle_options(),
    }
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    description: String,
    due: Option<String>,
    priority: Option<i64>,
    summarize: bool,
    quick: bool,
) -> Result<()> {
    let due = match due {
        Some(due) => Some(due),
        None if quick => None,
        None => prompt("Enter due date (YYYY-MM-DD) or press Enter to skip: "),
    };
    let priority = match priority {
        Some(priority) => Some(priority),
        None if quick => None,
        // An unparseable answer falls through to the default, same as the
        // add command itself would do.
        None => prompt("Enter priority 1 (high) - 5 (low) or press Enter for 3: ")
            .and_then(|line| line.parse().ok()),
    };

    let task = ctx.api.add(NewTask {
        title,
        description,
        due_date: due,
        priority,
        summarize,
    })?;

    println!("{}", format!("Added task #{}: {}", task.id, task.title).green());
    if !task.summary.is_empty() {
        println!("  Summary: {}", task.summary);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: FilterArg, sort: SortArg, show_summary: bool) -> Result<()> {
    let tasks = ctx.api.list(filter.into(), sort.into())?;
    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }
    for task in &tasks {
        println!("{}", task_line(task));
        if show_summary && !task.summary.is_empty() {
            println!("    Summary: {}", task.summary.dimmed());
        }
    }
    Ok(())
}

fn handle_complete(ctx: &mut AppContext, id: u64) -> Result<()> {
    if ctx.api.complete(id)? {
        println!("{}", format!("Task #{} marked complete.", id).green());
    } else {
        println!("{}", format!("Task #{} not found.", id).red());
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    if ctx.api.delete(id)? {
        println!("{}", format!("Task #{} deleted.", id).green());
    } else {
        println!("{}", format!("Task #{} not found.", id).red());
    }
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String) -> Result<()> {
    let tasks = ctx.api.search(&query)?;
    if tasks.is_empty() {
        println!("No matching tasks.");
        return Ok(());
    }
    for task in &tasks {
        println!(
            "[{}] #{} {} :: {}",
            status_icon(task),
            task.id,
            task.title,
            task.description
        );
    }
    Ok(())
}

fn handle_prioritize(ctx: &mut AppContext, id: u64) -> Result<()> {
    match ctx.api.prioritize(id)? {
        Some(outcome) => {
            if !outcome.rationale.is_empty() {
                println!("AI reasoning: {}", outcome.rationale.dimmed());
            }
            println!(
                "{}",
                format!("Task #{} priority set to {} (AI-determined).", id, outcome.priority)
                    .green()
            );
        }
        None => println!(
            "{}",
            format!(
                "Could not prioritize task #{}. Check OpenAI API key or task id.",
                id
            )
            .red()
        ),
    }
    Ok(())
}

fn handle_set_priority(ctx: &mut AppContext, id: u64, priority: i64) -> Result<()> {
    if ctx.api.set_priority(id, priority)? {
        println!(
            "{}",
            format!("Task #{} priority manually set to {}.", id, priority).green()
        );
    } else {
        println!(
            "{}",
            format!("Task #{} not found or invalid priority.", id).red()
        );
    }
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: u64,
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
) -> Result<()> {
    let edit = TaskEdit {
        title,
        description,
        due_date: due,
    };
    if ctx.api.edit(id, edit)? {
        println!("{}", format!("Task #{} updated.", id).green());
    } else {
        println!("{}", format!("Task #{} not found.", id).red());
    }
    Ok(())
}

fn handle_suggest(ctx: &AppContext, context: String) -> Result<()> {
    let suggestions = ctx.api.suggest(&context)?;
    println!("AI task suggestions:\n");
    for (i, suggestion) in suggestions.enumerate() {
        println!("{}. {}", i + 1, suggestion);
    }
    println!("\nUse 'taskz add --title \"<suggestion>\"' to add a task.");
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        let answer = prompt("Are you sure you want to delete ALL tasks? (yes/no): ");
        if answer.as_deref() != Some("yes") {
            println!("Clear cancelled.");
            return Ok(());
        }
    }
    let count = ctx.api.clear()?;
    println!("{}", format!("Cleared {} task(s).", count).green());
    Ok(())
}

fn handle_overview(ctx: &AppContext) -> Result<()> {
    let stats = ctx.api.overview(Utc::now().date_naive())?;
    println!("You have {} task(s).", stats.total);

    let mut parts = Vec::new();
    if stats.high_priority > 0 {
        parts.push(format!("{} high priority", stats.high_priority));
    }
    if stats.overdue > 0 {
        parts.push(format!("{} overdue", stats.overdue));
    }
    if stats.incomplete > 0 {
        parts.push(format!("{} incomplete", stats.incomplete));
    }
    if !parts.is_empty() {
        println!("{}.", parts.join(", "));
    }
    Ok(())
}

fn handle_options() -> Result<()> {
    println!("Available commands:\n");
    for (name, about) in [
        ("add", "Add a new task"),
        ("list", "List tasks (filter/sort)"),
        ("complete", "Mark a task complete"),
        ("delete", "Delete a task"),
        ("search", "Search tasks by text"),
        ("prioritize", "AI-powered task prioritization"),
        ("set-priority", "Manually set task priority"),
        ("edit", "Edit an existing task"),
        ("suggest", "Get AI task suggestions"),
        ("clear", "Delete all tasks"),
        ("overview", "Show task statistics"),
        ("options", "Show this command list"),
    ] {
        println!(" - {}: {}", name, about);
    }
    println!("\nUse 'taskz <command> --help' for details.");
    Ok(())
}

fn status_icon(task: &Task) -> ColoredString {
    match task.status {
        TaskStatus::Complete => "✔".green(),
        TaskStatus::Pending => "✘".yellow(),
    }
}

fn task_line(task: &Task) -> String {
    let due = task
        .due_date
        .map_or_else(|| "-".to_string(), |d| d.to_string());
    format!(
        "[{}] #{} (P{}) due:{} title:{}",
        status_icon(task),
        task.id,
        task.priority,
        due,
        task.title
    )
}

/// One-line stdin prompt; `None` on empty input or closed stdin.
fn prompt(message: &str) -> Option<String> {
    print!("{message}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return None;
    }
    let line = line.trim().to_string();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}
