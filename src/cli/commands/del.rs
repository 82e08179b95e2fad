use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::models::LogKind;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

use super::open_store;

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { kind, row, force } = cmd {
        let kind = LogKind::from_code(kind)?;

        let prompt = format!(
            "Delete {} row #{}? Following rows will be renumbered. This action is irreversible.",
            kind, row
        );

        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = open_store(cfg);
        DeleteLogic::apply(&store, kind, *row)?;
        success(format!("{} row #{} has been deleted.", kind, row));
    }

    Ok(())
}
