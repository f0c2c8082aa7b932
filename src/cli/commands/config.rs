use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{yaml}");
        }

        if *edit_config {
            edit(editor.as_deref())?;
        }
    }

    Ok(())
}

fn edit(requested: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        return Err(AppError::Config(format!(
            "{} not found, run `rattendance init` first",
            path.display()
        )));
    }

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });
    let editor = requested.unwrap_or(default_editor.as_str());

    match Command::new(editor).arg(&path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor}'"));
            return Ok(());
        }
        _ => warning(format!(
            "Editor '{editor}' not available, falling back to '{default_editor}'"
        )),
    }

    match Command::new(&default_editor).arg(&path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited using fallback '{default_editor}'"
            ));
            Ok(())
        }
        _ => {
            error(format!("Failed to edit configuration file using '{default_editor}'"));
            Err(AppError::Config(format!("no usable editor for {}", path.display())))
        }
    }
}
