use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the directories holding the two tables
///  - the student and attendance tables, each with its header row
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing rAttendance…");

    if !cli.test {
        cfg.save()?;
        success(format!("Config file:      {}", Config::config_file().display()));
    }

    for path in [cfg.student_path(), cfg.attendance_path()] {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
    }

    let tracker = cfg.open_tracker()?;
    success(format!(
        "Student table:    {}",
        tracker.student_file().display()
    ));
    success(format!(
        "Attendance table: {}",
        tracker.attendance_file().display()
    ));

    Ok(())
}
