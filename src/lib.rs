//! rAttendance library root.
//! Exposes the attendance tracker, its CSV stores, the CLI parser and the
//! high-level run() function used by the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

pub use crate::core::{Clock, FixedClock, Registration, SystemClock, Tracker};
pub use crate::models::{AttendanceEvent, Roster, Student};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Mark { .. } => cli::commands::mark::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Demo => cli::commands::demo::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply command-line overrides.
    let mut cfg = Config::load()?;

    if let Some(school) = &cli.school {
        cfg.school_name = school.clone();
    }
    if let Some(students) = &cli.students {
        cfg.student_file = students.clone();
    }
    if let Some(attendance) = &cli.attendance {
        cfg.attendance_file = attendance.clone();
    }

    dispatch(&cli, &cfg)
}
