use anyhow::Result;
use hoteldo_core::repository::TaskRepository;

pub async fn delete_task(repo: &impl TaskRepository, task_id: i64) -> Result<()> {
    repo.delete_task(task_id).await?;
    println!("Deleted task #{}", task_id);
    Ok(())
}
