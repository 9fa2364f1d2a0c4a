use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { file, priority } = cmd {
        ReportLogic::show(Path::new(file), priority.as_deref(), cfg)?;
    }
    Ok(())
}
