use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Student;

pub const DEMO_SCHOOL: &str = "Ramon Teves Pastor Dumaguete Science High School";

pub const DEMO_STUDENTS: [(&str, &str); 5] = [
    ("1", "Cylon"),
    ("2", "Jarey"),
    ("3", "Margaret"),
    ("4", "Nautica"),
    ("5", "Angel"),
];

pub const DEMO_ATTENDANCE: [(&str, bool); 5] = [
    ("1", true),
    ("2", false),
    ("3", true),
    ("4", false),
    ("5", true),
];

/// Handle the `demo` command
///
/// Runs a full session against the configured tables:
///  - registers the sample students
///  - marks today's attendance for each of them
///  - prints the attendance table
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let school = cli.school.as_deref().unwrap_or(DEMO_SCHOOL);
    let demo_cfg = Config {
        school_name: school.to_string(),
        ..cfg.clone()
    };
    let mut tracker = demo_cfg.open_tracker()?;

    for (id, name) in DEMO_STUDENTS {
        tracker.register_student(Student::new(id, name))?;
    }

    for (id, present) in DEMO_ATTENDANCE {
        tracker.mark_attendance(id, present)?;
    }

    println!();
    tracker.view_attendance()
}
