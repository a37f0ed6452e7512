//! Pure display groupings over task sequences. Each mode partitions its
//! input into calendar buckets; ordering within a bucket preserves the
//! input order except where noted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::models::Task;
use crate::weekend::{week_anchor, Weekend};

/// Target-weekend mode: tasks due on the weekend's three days, one list
/// per day. Tasks due outside the window are dropped.
#[derive(Debug, Default)]
pub struct WeekendView {
    pub friday: Vec<Task>,
    pub saturday: Vec<Task>,
    pub sunday: Vec<Task>,
}

pub fn weekend_view(tasks: Vec<Task>, weekend: &Weekend) -> WeekendView {
    let mut view = WeekendView::default();
    for task in tasks {
        if task.due_date == weekend.friday {
            view.friday.push(task);
        } else if task.due_date == weekend.saturday {
            view.saturday.push(task);
        } else if task.due_date == weekend.sunday {
            view.sunday.push(task);
        }
    }
    view
}

/// One week's bucket in the all-tasks view.
#[derive(Debug)]
pub struct WeekGroup {
    pub weekend: Weekend,
    pub friday_tasks: Vec<Task>,
    pub saturday_tasks: Vec<Task>,
    pub sunday_tasks: Vec<Task>,
}

impl WeekGroup {
    fn empty(weekend: Weekend) -> Self {
        Self {
            weekend,
            friday_tasks: Vec::new(),
            saturday_tasks: Vec::new(),
            sunday_tasks: Vec::new(),
        }
    }
}

/// All-tasks mode: every task bucketed by the Friday anchoring its week
/// (Monday-Thursday due dates anchor forward to the upcoming Friday).
/// Weeks come back most recent first.
pub fn weekly_view(tasks: Vec<Task>) -> Vec<WeekGroup> {
    let mut weeks: BTreeMap<NaiveDate, WeekGroup> = BTreeMap::new();
    for task in tasks {
        let anchor = week_anchor(task.due_date);
        let group = weeks
            .entry(anchor)
            .or_insert_with(|| WeekGroup::empty(Weekend::containing_friday(anchor)));
        if task.due_date == group.weekend.friday {
            group.friday_tasks.push(task);
        } else if task.due_date == group.weekend.saturday {
            group.saturday_tasks.push(task);
        } else if task.due_date == group.weekend.sunday {
            group.sunday_tasks.push(task);
        }
        // A Monday-Thursday due date claims the week but sits on none of
        // the three displayed days.
    }
    weeks.into_values().rev().collect()
}

/// One completion day's bucket in the completed view.
#[derive(Debug)]
pub struct CompletedGroup {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

/// Completed mode: done tasks with a completion timestamp, grouped by
/// the local calendar date of `done_at` (stored in UTC), most recent
/// date first, ordered by `display_order` within a date.
pub fn completed_view(tasks: Vec<Task>, tz: Tz) -> Vec<CompletedGroup> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        if !task.is_done {
            continue;
        }
        let Some(done_at) = task.done_at else { continue };
        let local_date = done_at.with_timezone(&tz).date_naive();
        by_date.entry(local_date).or_default().push(task);
    }
    by_date
        .into_iter()
        .rev()
        .map(|(date, mut tasks)| {
            tasks.sort_by_key(|t| t.display_order);
            CompletedGroup { date, tasks }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekend::target_weekend;
    use chrono::{DateTime, Duration, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: i64, due: NaiveDate) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            due_date: due,
            is_done: false,
            done_at: None,
            created_at: Utc::now(),
            is_recurring: false,
            display_order: 0,
        }
    }

    fn done_task(id: i64, done_at: DateTime<Utc>, display_order: i64) -> Task {
        Task {
            is_done: true,
            done_at: Some(done_at),
            display_order,
            ..task(id, done_at.date_naive())
        }
    }

    #[test]
    fn weekend_view_partitions_by_day() {
        let weekend = target_weekend(date(2024, 6, 12));
        let tasks = vec![
            task(1, weekend.friday),
            task(2, weekend.sunday),
            task(3, weekend.saturday),
            task(4, weekend.friday),
            // Outside the window, must be dropped.
            task(5, weekend.sunday + Duration::days(1)),
        ];

        let view = weekend_view(tasks, &weekend);
        assert_eq!(
            view.friday.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 4]
        );
        assert_eq!(view.saturday.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3]);
        assert_eq!(view.sunday.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn weekly_view_buckets_and_sorts_descending() {
        let tasks = vec![
            task(1, date(2024, 6, 14)),  // Friday, week of 06-14
            task(2, date(2024, 6, 22)),  // Saturday, week of 06-21
            task(3, date(2024, 6, 16)),  // Sunday, week of 06-14
            task(4, date(2024, 6, 12)),  // Wednesday, anchors forward to 06-14
        ];

        let weeks = weekly_view(tasks);
        assert_eq!(weeks.len(), 2);
        // Most recent week first.
        assert_eq!(weeks[0].weekend.friday, date(2024, 6, 21));
        assert_eq!(weeks[1].weekend.friday, date(2024, 6, 14));

        assert_eq!(weeks[0].saturday_tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(weeks[1].friday_tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(weeks[1].sunday_tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3]);
        // The Wednesday task claimed the 06-14 week but no day list.
        assert_eq!(weeks[1].saturday_tasks.len(), 0);
    }

    #[test]
    fn completed_view_groups_by_local_date() {
        let paris: Tz = "Europe/Paris".parse().unwrap();
        // 23:30 UTC on the 14th is already the 15th in Paris (UTC+2 in June).
        let late = "2024-06-14T23:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let midday = "2024-06-14T12:00:00Z".parse::<DateTime<Utc>>().unwrap();

        let tasks = vec![
            done_task(1, midday, 2),
            done_task(2, late, 0),
            done_task(3, midday, 1),
            // Open task and done-without-timestamp must be filtered out.
            task(4, date(2024, 6, 14)),
            Task {
                is_done: true,
                ..task(5, date(2024, 6, 14))
            },
        ];

        let groups = completed_view(tasks, paris);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, date(2024, 6, 15));
        assert_eq!(groups[0].tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(groups[1].date, date(2024, 6, 14));
        // Within a date, ascending display_order.
        assert_eq!(groups[1].tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn completed_view_in_utc_keeps_utc_dates() {
        let late = "2024-06-14T23:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let groups = completed_view(vec![done_task(1, late, 0)], chrono_tz::UTC);
        assert_eq!(groups[0].date, date(2024, 6, 14));
    }
}
