use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        Config::init(path, force)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }

    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        if path.exists() {
            info(format!("Configuration file: {}", path.display()));
        } else {
            warning(format!(
                "{} not found, showing built-in defaults",
                path.display()
            ));
        }
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report every configuration problem; fails when any is found.
    pub fn check(cfg: &Config) -> AppResult<()> {
        let problems = cfg.check();

        if problems.is_empty() {
            success("Configuration is valid.");
            return Ok(());
        }

        for p in &problems {
            error(p);
        }
        Err(AppError::Config(format!("{} problem(s) found", problems.len())))
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let ed = editor.clone().unwrap_or(default_editor);

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{}': {}", ed, e)))?;

        if status.success() {
            success(format!("Configuration file edited using '{}'", ed));
            Ok(())
        } else {
            Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)))
        }
    }
}
