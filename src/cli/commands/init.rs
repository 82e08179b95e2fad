use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::LogKind;
use crate::store::{LogStore, ttlog_quiet};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the data directory with both log files and their headers
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    info("Initializing fuellog…");
    let store = LogStore::new(cfg.data_path());

    for kind in LogKind::ALL {
        let path = store.path_for(kind);
        if store.ensure_file(kind)? {
            success(format!("Created {} log: {}", kind, path.display()));
        } else {
            info(format!("Existing {} log kept: {}", kind, path.display()));
        }
    }

    ttlog_quiet(
        store.data_dir(),
        "init",
        &store.data_dir().to_string_lossy(),
        "Log files initialized",
    );

    success("fuellog initialization completed!");
    Ok(())
}
