//! Attendance tracker: roster, event log and the two CSV tables.

use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::models::{AttendanceEvent, Roster, Student};
use crate::store::{AttendanceRow, DEFAULT_ATTENDANCE_FILE, DEFAULT_STUDENT_FILE, StudentRow, TableStore};
use crate::ui::messages::{success, warning};
use crate::utils::colors::paint_banner;
use crate::utils::table::{Column, Table};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Column widths of the attendance listing: Student ID, Name, Date, Present.
pub const ATTENDANCE_WIDTHS: [usize; 4] = [12, 20, 12, 10];
/// Column widths of the student listing: Student ID, Name.
pub const STUDENT_WIDTHS: [usize; 2] = [12, 20];

/// Outcome of [`Tracker::register_student`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Added,
    Duplicate,
}

pub struct Tracker<C: Clock = SystemClock> {
    roster: Roster,
    events: Vec<AttendanceEvent>,
    students: TableStore<StudentRow>,
    attendance: TableStore<AttendanceRow>,
    clock: C,
}

impl Tracker<SystemClock> {
    pub fn new(
        school_name: impl Into<String>,
        student_file: impl Into<PathBuf>,
        attendance_file: impl Into<PathBuf>,
    ) -> AppResult<Self> {
        Self::with_clock(school_name, student_file, attendance_file, SystemClock)
    }

    /// Use `students.csv` and `attendance.csv` in the working directory.
    pub fn with_default_files(school_name: impl Into<String>) -> AppResult<Self> {
        Self::new(school_name, DEFAULT_STUDENT_FILE, DEFAULT_ATTENDANCE_FILE)
    }
}

impl<C: Clock> Tracker<C> {
    /// Open both tables (writing their headers if the files are new) and
    /// load the students already on file into the roster.
    pub fn with_clock(
        school_name: impl Into<String>,
        student_file: impl Into<PathBuf>,
        attendance_file: impl Into<PathBuf>,
        clock: C,
    ) -> AppResult<Self> {
        let students = TableStore::<StudentRow>::open(student_file)?;
        let attendance = TableStore::<AttendanceRow>::open(attendance_file)?;

        // Columns are taken by position: an existing file keeps whatever
        // header it has. First row wins if an id repeats.
        let mut roster = Roster::new(school_name);
        for record in students.records()? {
            if let Some(row) = StudentRow::from_record(&record?) {
                roster.register(Student::from(row));
            }
        }

        Ok(Self {
            roster,
            events: Vec::new(),
            students,
            attendance,
            clock,
        })
    }

    pub fn school_name(&self) -> &str {
        self.roster.name()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Attendance events recorded by this tracker instance, oldest first.
    pub fn events(&self) -> &[AttendanceEvent] {
        &self.events
    }

    pub fn student_file(&self) -> &Path {
        self.students.path()
    }

    pub fn attendance_file(&self) -> &Path {
        self.attendance.path()
    }

    /// Add `student` to the roster and persist it.
    ///
    /// A duplicate id is reported and leaves both the roster and the
    /// student table untouched.
    pub fn register_student(&mut self, student: Student) -> AppResult<Registration> {
        let row = StudentRow::from(&student);

        if !self.roster.register(student) {
            warning(format!("Student ID {} already exists.", row.student_id));
            return Ok(Registration::Duplicate);
        }

        self.students.append(&row)?;
        success(format!("Student {} added.", row.name));
        Ok(Registration::Added)
    }

    /// Record one present/absent event for today.
    ///
    /// Returns `None` (after telling the operator) when the id is unknown;
    /// nothing is written in that case. Same-day repeats are kept as
    /// separate events.
    pub fn mark_attendance(
        &mut self,
        student_id: &str,
        present: bool,
    ) -> AppResult<Option<AttendanceEvent>> {
        let Some(student) = self.roster.lookup(student_id) else {
            warning(format!("No student found with ID {student_id}."));
            return Ok(None);
        };

        let event = AttendanceEvent::new(student_id, self.clock.today(), present);
        let row = AttendanceRow::new(&event, student);

        // Log only what reached the table.
        self.attendance.append(&row)?;
        self.events.push(event.clone());

        success(format!(
            "Attendance marked for student ID {} ({}) on {}.",
            student_id,
            row.name,
            event.date_str()
        ));
        Ok(Some(event))
    }

    pub fn mark_present(&mut self, student_id: &str) -> AppResult<Option<AttendanceEvent>> {
        self.mark_attendance(student_id, true)
    }

    /// Write the attendance listing to `out`, reading the table fresh from
    /// disk. Returns the number of data lines written.
    pub fn render_attendance<W: Write>(&self, out: &mut W) -> AppResult<usize> {
        let table = listing(self.attendance.columns(), &ATTENDANCE_WIDTHS);
        self.render_title(out)?;
        writeln!(out, "{}", table.header())?;

        let mut n = 0;
        for row in self.attendance.rows()? {
            writeln!(out, "{}", table.row(&row?.cells()))?;
            n += 1;
        }
        Ok(n)
    }

    /// Same as [`Tracker::render_attendance`] for the student table.
    pub fn render_students<W: Write>(&self, out: &mut W) -> AppResult<usize> {
        let table = listing(self.students.columns(), &STUDENT_WIDTHS);
        self.render_title(out)?;
        writeln!(out, "{}", table.header())?;

        let mut n = 0;
        for row in self.students.rows()? {
            writeln!(out, "{}", table.row(&row?.cells()))?;
            n += 1;
        }
        Ok(n)
    }

    pub fn view_attendance(&self) -> AppResult<()> {
        let mut out = io::stdout().lock();
        self.render_attendance(&mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn view_students(&self) -> AppResult<()> {
        let mut out = io::stdout().lock();
        self.render_students(&mut out)?;
        out.flush()?;
        Ok(())
    }

    fn render_title<W: Write>(&self, out: &mut W) -> AppResult<()> {
        writeln!(
            out,
            "{}",
            paint_banner(&format!("School: {}", self.school_name()))
        )?;
        Ok(())
    }
}

fn listing(headers: &[&str], widths: &[usize]) -> Table {
    Table::new(
        headers
            .iter()
            .zip(widths)
            .map(|(h, w)| Column::new(h, *w))
            .collect(),
    )
}
