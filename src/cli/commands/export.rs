use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::LogKind;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        kind,
        format,
        file,
        force,
    } = cmd
    {
        let kind = LogKind::from_code(kind)?;
        let store = open_store(cfg);
        ExportLogic::export(&store, kind, *format, file, *force)?;
    }
    Ok(())
}
