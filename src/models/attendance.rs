use crate::utils::date::format_date;
use chrono::NaiveDate;

/// One present/absent fact for one student on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEvent {
    pub student_id: String,
    pub date: NaiveDate, // YYYY-MM-DD, local calendar day
    pub present: bool,
}

impl AttendanceEvent {
    pub fn new(student_id: impl Into<String>, date: NaiveDate, present: bool) -> Self {
        Self {
            student_id: student_id.into(),
            date,
            present,
        }
    }

    pub fn date_str(&self) -> String {
        format_date(&self.date)
    }
}
