use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delay {
        start,
        end,
        priority,
    } = cmd
    {
        ReportLogic::delay(start, end, priority, cfg)?;
    }
    Ok(())
}
