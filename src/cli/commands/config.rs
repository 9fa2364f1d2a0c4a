use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = Config::resolve_path(cli.config.as_deref());

        if *print_config {
            ConfigLogic::print(&path, cfg)?;
        }

        if *check {
            ConfigLogic::check(cfg)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
