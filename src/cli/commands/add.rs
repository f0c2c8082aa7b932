use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Student;

/// Register a student. A duplicate id is reported, not treated as a failure.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { id, name } = cmd {
        let mut tracker = cfg.open_tracker()?;
        tracker.register_student(Student::new(id.as_str(), name.as_str()))?;
    }

    Ok(())
}
