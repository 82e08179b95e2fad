use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::scan::ScanLogic;
use crate::errors::AppResult;
use crate::models::ConsumptionRow;
use crate::store::ttlog_quiet;
use crate::ui::messages::{info, metric};
use std::path::Path;

use super::add::normalize_mode;
use super::{open_store, resolve_date};

/// Run the field extractor on recognizer output and optionally save the result.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan {
        spans,
        economy,
        odometer,
        save,
        date,
        mode,
        route,
    } = cmd
    {
        let default_economy = economy.unwrap_or(cfg.default_economy);
        let default_odometer = odometer.unwrap_or(cfg.default_odometer);

        let spans = ScanLogic::load_spans(Path::new(spans))?;
        let fields = ScanLogic::run(&spans, default_economy, default_odometer, &cfg.thresholds());

        info(format!("{} recognized spans analysed", spans.len()));
        metric(
            "Economy",
            Some(format!(
                "{} km/L{}",
                fields.economy,
                if fields.economy == default_economy { " (fallback)" } else { "" }
            )),
        );
        metric(
            "Odometer",
            Some(format!(
                "{} km{}",
                fields.odometer,
                if fields.odometer == default_odometer { " (fallback)" } else { "" }
            )),
        );

        if *save {
            let store = open_store(cfg);
            let mut row = ConsumptionRow::new(
                resolve_date(date)?,
                fields.economy,
                fields.odometer as f64,
            );
            row.mode = normalize_mode(mode.as_deref());
            row.route = route.clone().unwrap_or_default();

            AddLogic::consumption(&store, &row)?;
            ttlog_quiet(
                store.data_dir(),
                "scan",
                "consumption",
                &format!("{} spans → {} km/L, {} km", spans.len(), fields.economy, fields.odometer),
            );
        }
    }

    Ok(())
}
