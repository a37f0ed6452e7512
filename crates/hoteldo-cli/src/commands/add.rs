use anyhow::Result;
use hoteldo_core::clock::{Clock, SystemClock};
use hoteldo_core::models::{parse_due_date, CreateResult, NewTaskData};
use hoteldo_core::repository::TaskRepository;
use hoteldo_core::weekend::target_weekend;
use owo_colors::{OwoColorize, Style};

use crate::cli::AddCommand;

pub async fn add_task(repo: &impl TaskRepository, command: AddCommand) -> Result<()> {
    let due_date = match &command.due {
        Some(raw) => parse_due_date(raw)?,
        None => target_weekend(SystemClock.today()).friday,
    };

    let result = repo
        .create_if_absent(NewTaskData {
            title: command.title,
            due_date,
            is_recurring: command.recurring,
            display_order: command.order,
        })
        .await?;

    match result {
        CreateResult::Created(task) => {
            println!(
                "{} Created task #{}: '{}' due {}",
                "✓".style(Style::new().green().bold()),
                task.id,
                task.title,
                task.due_date
            );
        }
        CreateResult::AlreadyExists(task) => {
            // An idempotent no-op, not a failure: report it distinctly.
            println!(
                "{} Task already exists as #{}: '{}' due {}",
                "i".style(Style::new().yellow().bold()),
                task.id,
                task.title,
                task.due_date
            );
        }
    }
    Ok(())
}
