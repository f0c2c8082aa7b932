//! CSV persistence: one student table and one attendance table.

pub mod records;
pub mod table;

pub use records::{ATTENDANCE_COLUMNS, AttendanceRow, STUDENT_COLUMNS, StudentRow, TableRecord};
pub use table::TableStore;

/// Default file names used when the caller does not supply paths.
pub const DEFAULT_STUDENT_FILE: &str = "students.csv";
pub const DEFAULT_ATTENDANCE_FILE: &str = "attendance.csv";
