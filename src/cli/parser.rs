use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to keep a student roster and a daily attendance log in CSV files
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: register students and log daily attendance in CSV files",
    long_about = None
)]
pub struct Cli {
    /// Override the school name shown in listings
    #[arg(global = true, long = "school")]
    pub school: Option<String>,

    /// Override the student table path (CSV)
    #[arg(global = true, long = "students", value_name = "FILE")]
    pub students: Option<String>,

    /// Override the attendance table path (CSV)
    #[arg(global = true, long = "attendance", value_name = "FILE")]
    pub attendance: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and both CSV tables
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Register a new student
    Add {
        /// Unique student identifier
        id: String,

        /// Student name
        name: String,
    },

    /// Record today's attendance for a student
    Mark {
        /// Student identifier
        id: String,

        #[arg(long = "absent", help = "Record the student as absent (default: present)")]
        absent: bool,
    },

    /// Print the attendance table
    List {
        #[arg(long = "roster", help = "Print the student table instead")]
        roster: bool,
    },

    /// Register the sample students, mark their attendance and print the table
    Demo,
}
