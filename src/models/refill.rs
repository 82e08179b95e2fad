use super::row::LogRow;
use super::schema::{DATE, FUEL_TYPE, ODOMETER, PRICE_PER_UNIT, QUANTITY, STATION, TOTAL_COST};
use super::value::CellValue;
use chrono::NaiveDate;
use serde::Serialize;

/// Tolerance used when auditing `TotalCost` against `PricePerUnit * Quantity`.
pub const COST_TOLERANCE: f64 = 0.005;

/// A refueling event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefillRow {
    pub date: Option<NaiveDate>, // ⇔ Date
    pub station: String,         // ⇔ Station
    pub fuel_type: String,       // ⇔ FuelType
    pub price_per_unit: f64,     // ⇔ PricePerUnit
    pub quantity: f64,           // ⇔ Quantity (volume)
    pub total_cost: f64,         // ⇔ TotalCost
    pub odometer: f64,           // ⇔ Odometer
}

impl RefillRow {
    /// Build a refill with `total_cost = price_per_unit * quantity`.
    pub fn new(
        date: NaiveDate,
        station: &str,
        fuel_type: &str,
        price_per_unit: f64,
        quantity: f64,
        odometer: f64,
    ) -> Self {
        Self {
            date: Some(date),
            station: station.to_string(),
            fuel_type: fuel_type.to_string(),
            price_per_unit,
            quantity,
            total_cost: price_per_unit * quantity,
            odometer,
        }
    }

    /// Stored total is trusted as-is; see `cost_mismatch`.
    pub fn from_row(row: &LogRow) -> Self {
        Self {
            date: row.date(DATE),
            station: row.text(STATION).to_string(),
            fuel_type: row.text(FUEL_TYPE).to_string(),
            price_per_unit: row.numeric(PRICE_PER_UNIT),
            quantity: row.numeric(QUANTITY),
            total_cost: row.numeric(TOTAL_COST),
            odometer: row.numeric(ODOMETER),
        }
    }

    pub fn to_row(&self) -> LogRow {
        LogRow::new()
            .with(DATE, CellValue::Date(self.date))
            .with(STATION, CellValue::Text(self.station.clone()))
            .with(FUEL_TYPE, CellValue::Text(self.fuel_type.clone()))
            .with(PRICE_PER_UNIT, CellValue::Numeric(self.price_per_unit))
            .with(QUANTITY, CellValue::Numeric(self.quantity))
            .with(TOTAL_COST, CellValue::Numeric(self.total_cost))
            .with(ODOMETER, CellValue::Numeric(self.odometer))
    }

    pub fn expected_total(&self) -> f64 {
        self.price_per_unit * self.quantity
    }

    pub fn recompute_total(&mut self) {
        self.total_cost = self.expected_total();
    }

    /// Difference between stored and expected total, if beyond tolerance.
    pub fn cost_mismatch(&self) -> Option<f64> {
        let diff = self.total_cost - self.expected_total();
        (diff.abs() > COST_TOLERANCE).then_some(diff)
    }
}

/// Recompute `TotalCost` inside a raw row (used by the edit path).
pub fn recompute_total_in_row(row: &mut LogRow) {
    let total = row.numeric(PRICE_PER_UNIT) * row.numeric(QUANTITY);
    row.set(TOTAL_COST, CellValue::Numeric(total));
}
