use anyhow::Result;
use hoteldo_core::repository::TaskRepository;

use crate::cli::DoneCommand;

pub async fn toggle_task(repo: &impl TaskRepository, command: DoneCommand) -> Result<()> {
    let task = repo.toggle_done(command.id).await?;
    if task.is_done {
        println!("Completed task #{}: '{}'", task.id, task.title);
    } else {
        println!("Reopened task #{}: '{}'", task.id, task.title);
    }
    Ok(())
}
