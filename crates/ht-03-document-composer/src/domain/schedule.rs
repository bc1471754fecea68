//! # Exam Schedule
//!
//! Static table of `{label, code, day_offset}` entries. Each exam is dated
//! `issued_on + day_offset` calendar days.
//!
//! On disk the schedule is a JSON array:
//!
//! ```json
//! [{ "label": "Mathematics", "code": "MTH101", "day_offset": 10 }]
//! ```

use crate::domain::errors::ScheduleError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rendering of exam dates on the ticket.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One exam in the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub label: String,
    pub code: String,
    /// Calendar days after the issuance date.
    pub day_offset: u32,
}

impl ScheduleItem {
    pub fn new(label: impl Into<String>, code: impl Into<String>, day_offset: u32) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
            day_offset,
        }
    }

    /// Date of this exam for a ticket issued on `issued_on`.
    pub fn date_from(&self, issued_on: NaiveDate) -> Result<NaiveDate, ScheduleError> {
        issued_on
            .checked_add_days(Days::new(u64::from(self.day_offset)))
            .ok_or_else(|| ScheduleError::DateOutOfRange {
                label: self.label.clone(),
            })
    }

    /// `"<label> (<code>) - YYYY-MM-DD"`
    pub fn line_from(&self, issued_on: NaiveDate) -> Result<String, ScheduleError> {
        let date = self.date_from(issued_on)?;
        Ok(format!(
            "{} ({}) - {}",
            self.label,
            self.code,
            date.format(DATE_FORMAT)
        ))
    }
}

/// Ordered list of exams printed on every ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamSchedule {
    items: Vec<ScheduleItem>,
}

impl Default for ExamSchedule {
    fn default() -> Self {
        Self {
            items: vec![
                ScheduleItem::new("Mathematics", "MTH101", 10),
                ScheduleItem::new("Physics", "PHY101", 15),
                ScheduleItem::new("Chemistry", "CHM101", 20),
            ],
        }
    }
}

impl ExamSchedule {
    /// Build a schedule, rejecting items with an empty label or code.
    pub fn new(items: Vec<ScheduleItem>) -> Result<Self, ScheduleError> {
        for (index, item) in items.iter().enumerate() {
            if item.label.is_empty() {
                return Err(ScheduleError::EmptyField {
                    index,
                    field: "label",
                });
            }
            if item.code.is_empty() {
                return Err(ScheduleError::EmptyField {
                    index,
                    field: "code",
                });
            }
        }
        Ok(Self { items })
    }

    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        let items: Vec<ScheduleItem> =
            serde_json::from_str(json).map_err(|e| ScheduleError::Parse(e.to_string()))?;
        Self::new(items)
    }

    /// Load a JSON schedule file.
    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let json = std::fs::read_to_string(path).map_err(|e| ScheduleError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Printed lines, in schedule order, for a ticket issued on `issued_on`.
    pub fn dated_lines(&self, issued_on: NaiveDate) -> Result<Vec<String>, ScheduleError> {
        self.items
            .iter()
            .map(|item| item.line_from(issued_on))
            .collect()
    }
}
