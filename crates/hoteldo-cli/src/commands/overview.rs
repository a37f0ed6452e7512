use anyhow::Result;
use hoteldo_core::grouping::weekly_view;
use hoteldo_core::models::{TaskFilter, MAX_PAGE_LIMIT};
use hoteldo_core::repository::TaskRepository;

use crate::views::table::display_weeks;

/// The all-tasks view: every task bucketed by its week's Friday.
pub async fn show_all(repo: &impl TaskRepository) -> Result<()> {
    let page = repo
        .list_tasks(&TaskFilter {
            limit: MAX_PAGE_LIMIT,
            ..Default::default()
        })
        .await?;

    let weeks = weekly_view(page.tasks);
    display_weeks(&weeks);
    Ok(())
}
