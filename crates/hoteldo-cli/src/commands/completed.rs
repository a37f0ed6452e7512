use anyhow::Result;
use hoteldo_core::grouping::completed_view;
use hoteldo_core::models::{TaskFilter, MAX_PAGE_LIMIT};
use hoteldo_core::repository::TaskRepository;

use crate::config::Config;
use crate::views::table::display_completed;

pub async fn show_completed(repo: &impl TaskRepository, config: &Config) -> Result<()> {
    let page = repo
        .list_tasks(&TaskFilter {
            is_done: Some(true),
            limit: MAX_PAGE_LIMIT,
            ..Default::default()
        })
        .await?;

    let groups = completed_view(page.tasks, config.display_timezone());
    display_completed(&groups);
    Ok(())
}
