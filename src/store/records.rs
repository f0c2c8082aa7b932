//! Fixed-schema row types for the two CSV tables.
//!
//! Field names map 1:1 onto the header row of each file, so the csv reader
//! can match columns by name and the writer emits them in header order.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceEvent, Student};
use crate::utils::date::format_date;
use chrono::NaiveDate;
use csv::StringRecord;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const STUDENT_COLUMNS: &[&str] = &["Student ID", "Name"];
pub const ATTENDANCE_COLUMNS: &[&str] = &["Student ID", "Name", "Date", "Present"];

/// A row type that owns a table: it knows its header.
pub trait TableRecord: Serialize + DeserializeOwned {
    const COLUMNS: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRow {
    #[serde(rename = "Student ID")]
    pub student_id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

impl TableRecord for StudentRow {
    const COLUMNS: &'static [&'static str] = STUDENT_COLUMNS;
}

impl From<&Student> for StudentRow {
    fn from(s: &Student) -> Self {
        Self {
            student_id: s.id.clone(),
            name: s.name.clone(),
        }
    }
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::new(row.student_id, row.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    #[serde(rename = "Student ID")]
    pub student_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Present", with = "yes_no")]
    pub present: bool,
}

impl TableRecord for AttendanceRow {
    const COLUMNS: &'static [&'static str] = ATTENDANCE_COLUMNS;
}

impl AttendanceRow {
    pub fn new(event: &AttendanceEvent, student: &Student) -> Self {
        Self {
            student_id: event.student_id.clone(),
            name: student.name.clone(),
            date: event.date,
            present: event.present,
        }
    }

    /// Cells as they appear in the file (`Present` rendered as Yes/No).
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.name.clone(),
            format_date(&self.date),
            presence_str(self.present).to_string(),
        ]
    }
}

impl StudentRow {
    /// Build a row from the first two fields of a raw record.
    /// Rows with fewer than two fields yield `None`.
    pub fn from_record(record: &StringRecord) -> Option<Self> {
        Some(Self {
            student_id: record.get(0)?.to_string(),
            name: record.get(1)?.to_string(),
        })
    }

    pub fn cells(&self) -> Vec<String> {
        vec![self.student_id.clone(), self.name.clone()]
    }
}

pub fn presence_str(present: bool) -> &'static str {
    if present { "Yes" } else { "No" }
}

pub fn parse_presence(s: &str) -> AppResult<bool> {
    match s {
        "Yes" => Ok(true),
        "No" => Ok(false),
        other => Err(AppError::InvalidPresence(other.to_string())),
    }
}

/// `Present` column codec: `true` ⇔ "Yes", `false` ⇔ "No".
mod yes_no {
    use super::{parse_presence, presence_str};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(present: &bool, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(presence_str(*present))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(d)?;
        parse_presence(&raw).map_err(de::Error::custom)
    }
}
