use anyhow::Result;
use hoteldo_core::clock::{Clock, SystemClock};
use hoteldo_core::grouping::weekend_view;
use hoteldo_core::models::{parse_due_date, TaskFilter, MAX_PAGE_LIMIT};
use hoteldo_core::repository::TaskRepository;
use hoteldo_core::weekend::target_weekend;

use crate::cli::WeekendCommand;
use crate::views::table::display_weekend;

pub async fn show_weekend(repo: &impl TaskRepository, command: WeekendCommand) -> Result<()> {
    let reference = match &command.date {
        Some(raw) => parse_due_date(raw)?,
        None => SystemClock.today(),
    };
    let weekend = target_weekend(reference);

    let page = repo
        .list_tasks(&TaskFilter {
            due_from: Some(weekend.friday),
            due_to: Some(weekend.sunday),
            limit: MAX_PAGE_LIMIT,
            ..Default::default()
        })
        .await?;

    let view = weekend_view(page.tasks, &weekend);
    display_weekend(&view, &weekend);
    Ok(())
}
