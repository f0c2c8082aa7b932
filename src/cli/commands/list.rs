use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { roster } = cmd {
        let tracker = cfg.open_tracker()?;

        if *roster {
            tracker.view_students()?;
        } else {
            tracker.view_attendance()?;
        }
    }

    Ok(())
}
