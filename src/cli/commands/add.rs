use crate::cli::parser::{AddEntry, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{ConsumptionRow, DrivingMode, RefillRow};
use crate::ui::messages::warning;

use super::{open_store, resolve_date};

/// Add a consumption reading or a refill.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { entry } = cmd {
        let store = open_store(cfg);

        match entry {
            AddEntry::Consumption {
                date,
                economy,
                odometer,
                mode,
                route,
            } => {
                let d = resolve_date(date)?;
                check_non_negative("economy", *economy)?;
                check_non_negative("odometer", *odometer)?;

                let mut row = ConsumptionRow::new(d, *economy, *odometer);
                row.mode = normalize_mode(mode.as_deref());
                row.route = route.clone().unwrap_or_default();

                AddLogic::consumption(&store, &row)?;
            }
            AddEntry::Refill {
                date,
                station,
                fuel_type,
                price,
                quantity,
                odometer,
            } => {
                let d = resolve_date(date)?;
                check_non_negative("price", *price)?;
                check_non_negative("quantity", *quantity)?;
                check_non_negative("odometer", *odometer)?;

                let row = RefillRow::new(d, station, fuel_type, *price, *quantity, *odometer);
                AddLogic::refill(&store, &row)?;
            }
        }
    }

    Ok(())
}

/// Known modes are stored by label; anything else is kept with a warning.
pub(crate) fn normalize_mode(mode: Option<&str>) -> String {
    let Some(m) = mode else {
        return String::new();
    };
    let (normalized, known) = DrivingMode::normalize(m);
    if !known {
        warning(format!(
            "Unknown driving mode '{}' stored as free text (known: City, Highway, Mixed, Eco).",
            normalized
        ));
    }
    normalized
}

fn check_non_negative(name: &str, v: f64) -> AppResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidNumber(format!("{} must be a non-negative number, got {}", name, v)))
    }
}
