use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A Friday-Sunday window. Saturday and Sunday are always the two days
/// following `friday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weekend {
    pub friday: NaiveDate,
    pub saturday: NaiveDate,
    pub sunday: NaiveDate,
}

impl Weekend {
    /// Builds the window starting at `friday`. The caller is responsible
    /// for passing an actual Friday; `target_weekend` and `week_anchor`
    /// always do.
    pub fn containing_friday(friday: NaiveDate) -> Self {
        Self {
            friday,
            saturday: friday + Duration::days(1),
            sunday: friday + Duration::days(2),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.friday && date <= self.sunday
    }
}

/// Computes the target weekend for a reference date.
///
/// On a Friday, Saturday or Sunday the target is the weekend containing
/// the reference date; Monday through Thursday target the upcoming one.
pub fn target_weekend(reference: NaiveDate) -> Weekend {
    Weekend::containing_friday(week_anchor(reference))
}

/// The Friday keying the Friday-Sunday window a date belongs to:
/// Monday-Thursday roll forward to the next Friday, Friday-Sunday roll
/// back to the most recent one. Used both for targeting the entry form
/// and for bucketing historical tasks by week.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    // Monday = 0 .. Sunday = 6; Friday = 4.
    let weekday = i64::from(date.weekday().num_days_from_monday());
    if weekday >= 4 {
        date - Duration::days(weekday - 4)
    } else {
        date + Duration::days(4 - weekday)
    }
}
