use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::errors::AppResult;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats = cmd {
        let store = open_store(cfg);
        let report = StatsLogic::build(&store)?;
        StatsLogic::print(&report, cfg);
    }
    Ok(())
}
