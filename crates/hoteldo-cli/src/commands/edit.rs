use anyhow::Result;
use hoteldo_core::repository::TaskRepository;

use crate::cli::EditCommand;

pub async fn edit_task(repo: &impl TaskRepository, command: EditCommand) -> Result<()> {
    let task = repo.rename_task(command.id, &command.title).await?;
    println!("Renamed task #{} to '{}'", task.id, task.title);
    Ok(())
}
