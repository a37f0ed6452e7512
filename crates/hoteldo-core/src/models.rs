use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::CoreError;

/// Maximum title length after trimming surrounding whitespace.
pub const MAX_TITLE_LEN: usize = 500;

/// Valid range for the `limit` pagination parameter.
pub const MAX_PAGE_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub due_date: NaiveDate,
    pub is_done: bool,
    /// Set exactly when `is_done` transitions false -> true, cleared on
    /// the reverse transition.
    pub done_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Informational flag consumed by the external weekly seeder.
    pub is_recurring: bool,
    /// Secondary sort key among tasks sharing a due date.
    pub display_order: i64,
}

#[derive(Debug, Clone)]
pub struct NewTaskData {
    pub title: String,
    pub due_date: NaiveDate,
    pub is_recurring: bool,
    pub display_order: i64,
}

impl Default for NewTaskData {
    fn default() -> Self {
        Self {
            title: String::new(),
            due_date: NaiveDate::default(),
            is_recurring: false,
            display_order: 0,
        }
    }
}

/// Outcome of `create_if_absent`. `AlreadyExists` is a successful
/// idempotent no-op carrying the pre-existing open task, not an error.
#[derive(Debug)]
pub enum CreateResult {
    Created(Task),
    AlreadyExists(Task),
}

impl CreateResult {
    pub fn task(&self) -> &Task {
        match self {
            Self::Created(task) | Self::AlreadyExists(task) => task,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Filter and pagination parameters for listing tasks.
#[derive(Debug, Clone)]
pub struct TaskFilter {
    /// Inclusive lower bound on `due_date`.
    pub due_from: Option<NaiveDate>,
    /// Inclusive upper bound on `due_date`.
    pub due_to: Option<NaiveDate>,
    pub is_done: Option<bool>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            due_from: None,
            due_to: None,
            is_done: None,
            limit: 100,
            offset: 0,
        }
    }
}

impl TaskFilter {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.limit < 1 || self.limit > MAX_PAGE_LIMIT {
            return Err(CoreError::InvalidInput(format!(
                "limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }
        if self.offset < 0 {
            return Err(CoreError::InvalidInput(
                "offset must be 0 or greater".to_string(),
            ));
        }
        Ok(())
    }
}

/// One page of tasks plus the metadata a paginating caller needs.
#[derive(Debug)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

impl TaskPage {
    pub fn has_more(&self) -> bool {
        self.offset + self.limit < self.total
    }
}

/// Normalizes and validates a title: trims surrounding whitespace,
/// rejects empty and oversized results.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(
            "title is required and cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::InvalidInput(format!(
            "title cannot exceed {} characters",
            MAX_TITLE_LEN
        )));
    }
    Ok(trimmed.to_string())
}

/// Parses a due date in strict ISO `YYYY-MM-DD` form. Shared by every
/// creation path so the CLI and any other caller agree on the contract.
pub fn parse_due_date(date_str: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        CoreError::InvalidInput(format!(
            "due date '{}' must be in YYYY-MM-DD format",
            date_str
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_title_trims_whitespace() {
        assert_eq!(validate_title("  Clean lobby  ").unwrap(), "Clean lobby");
    }

    #[test]
    fn validate_title_rejects_empty_after_trim() {
        assert!(matches!(
            validate_title("   "),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_title_rejects_oversized() {
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(matches!(
            validate_title(&long),
            Err(CoreError::InvalidInput(_))
        ));
        let max = "x".repeat(MAX_TITLE_LEN);
        assert!(validate_title(&max).is_ok());
    }

    #[test]
    fn parse_due_date_accepts_iso() {
        let date = parse_due_date("2024-06-14").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
    }

    #[test]
    fn parse_due_date_rejects_garbage() {
        assert!(parse_due_date("2024-13-40").is_err());
        assert!(parse_due_date("14/06/2024").is_err());
        assert!(parse_due_date("").is_err());
    }

    #[test]
    fn filter_validation_bounds() {
        let mut filter = TaskFilter::default();
        assert!(filter.validate().is_ok());

        filter.limit = 0;
        assert!(filter.validate().is_err());
        filter.limit = 1001;
        assert!(filter.validate().is_err());
        filter.limit = 1000;
        assert!(filter.validate().is_ok());

        filter.offset = -1;
        assert!(filter.validate().is_err());
    }

    #[test]
    fn page_has_more() {
        let page = |total, limit, offset| TaskPage {
            tasks: vec![],
            total,
            limit,
            offset,
        };
        assert!(page(10, 5, 0).has_more());
        assert!(!page(10, 5, 5).has_more());
        assert!(!page(10, 20, 0).has_more());
    }
}
