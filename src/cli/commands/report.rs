use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        file,
        format,
        out,
        priority,
        force,
    } = cmd
    {
        ReportLogic::report(
            Path::new(file),
            format.unwrap_or(cfg.default_format),
            out.as_deref().map(Path::new),
            priority.as_deref(),
            *force,
            cfg,
        )?;
    }
    Ok(())
}
