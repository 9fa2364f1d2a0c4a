use crate::cli::parser::Commands;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::SortDates { format, dates } = cmd {
        ReportLogic::sort_dates(dates, format)?;
    }
    Ok(())
}
