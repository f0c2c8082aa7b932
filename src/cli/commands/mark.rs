use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Record today's attendance. An unknown id is reported and nothing is written.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark { id, absent } = cmd {
        let mut tracker = cfg.open_tracker()?;
        tracker.mark_attendance(id, !*absent)?;
    }

    Ok(())
}
