use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::resolve_path(cli.config.as_deref());
        ConfigLogic::init(&path, *force)?;
    }
    Ok(())
}
