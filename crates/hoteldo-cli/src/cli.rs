use clap::{Parser, Subcommand};

/// Weekend housekeeping todo list for the hotel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a task (due date defaults to the target weekend's Friday)
    Add(AddCommand),
    /// List tasks with optional filters
    List(ListCommand),
    /// Show the target weekend view
    Weekend(WeekendCommand),
    /// Show every task grouped by week
    All,
    /// Show completed tasks grouped by completion date
    Completed,
    /// Toggle a task between open and done
    Done(DoneCommand),
    /// Rename a task
    Edit(EditCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Check database connectivity
    Health,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The due date (YYYY-MM-DD); defaults to the target weekend's Friday
    #[clap(short, long)]
    pub due: Option<String>,
    /// Flag the task as part of the recurring weekly catalog
    #[clap(long)]
    pub recurring: bool,
    /// Display order among tasks sharing a due date
    #[clap(long, default_value_t = 0)]
    pub order: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Only tasks due on or after this date (YYYY-MM-DD)
    #[clap(long)]
    pub from: Option<String>,
    /// Only tasks due on or before this date (YYYY-MM-DD)
    #[clap(long)]
    pub to: Option<String>,
    /// Only completed tasks
    #[clap(long, conflicts_with = "open")]
    pub done: bool,
    /// Only open tasks
    #[clap(long)]
    pub open: bool,
    /// Maximum number of tasks to return (1-1000)
    #[clap(long, default_value_t = 100)]
    pub limit: i64,
    /// Number of tasks to skip
    #[clap(long, default_value_t = 0)]
    pub offset: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct WeekendCommand {
    /// Reference date (YYYY-MM-DD) instead of today
    #[clap(long)]
    pub date: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to toggle
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to rename
    pub id: i64,
    /// The new title
    pub title: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: i64,
    /// Skip the confirmation prompt
    #[clap(short, long)]
    pub force: bool,
}
