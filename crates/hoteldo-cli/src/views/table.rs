use chrono::NaiveDate;
use comfy_table::{Cell, Color, Row, Table};
use hoteldo_core::grouping::{CompletedGroup, WeekGroup, WeekendView};
use hoteldo_core::models::{Task, TaskPage};
use hoteldo_core::weekend::Weekend;
use owo_colors::{OwoColorize, Style};

pub fn display_task_page(page: &TaskPage) {
    if page.tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Due", "Status", "Order"]);
    for task in &page.tasks {
        table.add_row(task_row(task));
    }
    println!("{table}");

    let more = if page.has_more() {
        " (more available, raise --offset)"
    } else {
        ""
    };
    println!(
        "Showing {} of {} task(s), offset {}{}",
        page.tasks.len(),
        page.total,
        page.offset,
        more
    );
}

fn task_row(task: &Task) -> Row {
    let mut row = Row::new();
    row.add_cell(Cell::new(task.id));

    let mut title = String::new();
    if task.is_recurring {
        // Recurring symbol, same marker the seeder catalog uses.
        title.push('↻');
        title.push(' ');
    }
    title.push_str(&task.title);
    row.add_cell(Cell::new(title));

    row.add_cell(Cell::new(task.due_date));
    let status = if task.is_done {
        Cell::new("done").fg(Color::Green)
    } else {
        Cell::new("open").fg(Color::Yellow)
    };
    row.add_cell(status);
    row.add_cell(Cell::new(task.display_order));
    row
}

pub fn display_weekend(view: &WeekendView, weekend: &Weekend) {
    println!(
        "{}",
        format!("Target weekend starting {}", weekend.friday)
            .style(Style::new().bold().underline())
    );
    display_day("Friday", weekend.friday, &view.friday);
    display_day("Saturday", weekend.saturday, &view.saturday);
    display_day("Sunday", weekend.sunday, &view.sunday);
}

pub fn display_weeks(weeks: &[WeekGroup]) {
    if weeks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for week in weeks {
        println!(
            "\n{}",
            format!("Week of {}", week.weekend.friday).style(Style::new().bold().underline())
        );
        display_day("Friday", week.weekend.friday, &week.friday_tasks);
        display_day("Saturday", week.weekend.saturday, &week.saturday_tasks);
        display_day("Sunday", week.weekend.sunday, &week.sunday_tasks);
    }
}

fn display_day(label: &str, date: NaiveDate, tasks: &[Task]) {
    println!("\n{} ({})", label.style(Style::new().bold()), date);
    if tasks.is_empty() {
        println!("  (no tasks)");
        return;
    }
    for task in tasks {
        let (mark, mark_style) = if task.is_done {
            ("✓", Style::new().green())
        } else {
            ("·", Style::new().yellow())
        };
        let recurring = if task.is_recurring { " ↻" } else { "" };
        println!(
            "  {} #{} {}{}",
            mark.style(mark_style),
            task.id,
            task.title,
            recurring
        );
    }
}

pub fn display_completed(groups: &[CompletedGroup]) {
    if groups.is_empty() {
        println!("No completed tasks.");
        return;
    }
    for group in groups {
        println!(
            "\n{}",
            group.date.to_string().style(Style::new().bold().underline())
        );
        for task in &group.tasks {
            println!(
                "  {} #{} {} (due {})",
                "✓".style(Style::new().green()),
                task.id,
                task.title,
                task.due_date
            );
        }
    }
}
