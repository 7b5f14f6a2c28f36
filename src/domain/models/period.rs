use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One calendar month, UTC. All payroll aggregation windows are exact
/// months, so the period carries plain (year, month) rather than a range.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: i32,
}

impl Period {
    pub fn new(year: i32, month: i32) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::Validation(format!("month must be between 1 and 12, got {}", month)));
        }
        if !(1970..=9999).contains(&year) {
            return Err(AppError::Validation(format!("year out of range: {}", year)));
        }
        Ok(Self { year, month })
    }

    pub fn first_day(&self) -> NaiveDate {
        // Month is validated on construction.
        NaiveDate::from_ymd_opt(self.year, self.month as u32, 1)
            .expect("validated period is a real month")
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day() + Months::new(1) - Days::new(1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }
}
