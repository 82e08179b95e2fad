use crate::errors::AppResult;
use crate::models::{ConsumptionRow, LogKind, RefillRow};
use crate::store::{LogStore, ttlog_quiet};
use crate::ui::messages::success;
use crate::utils::date::format_date;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn consumption(store: &LogStore, row: &ConsumptionRow) -> AppResult<usize> {
        store.append(&row.to_row(), LogKind::Consumption)?;
        let count = store.load(LogKind::Consumption)?.len();

        let date = row.date.as_ref().map(format_date).unwrap_or_default();
        success(format!(
            "Reading #{} saved: {} km/L at {} km ({})",
            count, row.consumption, row.odometer, date
        ));
        ttlog_quiet(
            store.data_dir(),
            "add",
            LogKind::Consumption.as_str(),
            &format!("row {}: {} km/L, odometer {}", count, row.consumption, row.odometer),
        );
        Ok(count)
    }

    /// `TotalCost` is always recomputed from price and quantity before writing.
    pub fn refill(store: &LogStore, row: &RefillRow) -> AppResult<usize> {
        let mut row = row.clone();
        row.recompute_total();

        store.append(&row.to_row(), LogKind::Refill)?;
        let count = store.load(LogKind::Refill)?.len();

        let date = row.date.as_ref().map(format_date).unwrap_or_default();
        success(format!(
            "Refill #{} saved: {} L of {} at {} for {:.2} ({})",
            count, row.quantity, row.fuel_type, row.station, row.total_cost, date
        ));
        ttlog_quiet(
            store.data_dir(),
            "add",
            LogKind::Refill.as_str(),
            &format!(
                "row {}: {} L x {} = {:.2}, odometer {}",
                count, row.quantity, row.price_per_unit, row.total_cost, row.odometer
            ),
        );
        Ok(count)
    }
}
