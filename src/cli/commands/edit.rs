use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{Assignment, EditLogic, parse_assignment};
use crate::errors::AppResult;
use crate::models::LogKind;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { kind, row, set } = cmd {
        let kind = LogKind::from_code(kind)?;

        // validate everything before touching the file
        let assignments = set
            .iter()
            .map(|s| parse_assignment(kind, s))
            .collect::<AppResult<Vec<Assignment>>>()?;

        let store = open_store(cfg);
        EditLogic::apply(&store, kind, *row, &assignments)?;
    }

    Ok(())
}
