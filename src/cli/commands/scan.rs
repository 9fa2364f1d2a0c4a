use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { file, out, force } = cmd {
        ReportLogic::scan(
            Path::new(file),
            out.as_deref().map(Path::new),
            *force,
            cfg,
        )?;
    }
    Ok(())
}
