use anyhow::Result;
use hoteldo_core::models::{parse_due_date, TaskFilter};
use hoteldo_core::repository::TaskRepository;

use crate::cli::ListCommand;
use crate::views::table::display_task_page;

pub async fn list_tasks(repo: &impl TaskRepository, command: ListCommand) -> Result<()> {
    let filter = TaskFilter {
        due_from: command.from.as_deref().map(parse_due_date).transpose()?,
        due_to: command.to.as_deref().map(parse_due_date).transpose()?,
        is_done: if command.done {
            Some(true)
        } else if command.open {
            Some(false)
        } else {
            None
        },
        limit: command.limit,
        offset: command.offset,
    };

    let page = repo.list_tasks(&filter).await?;
    display_task_page(&page);
    Ok(())
}
