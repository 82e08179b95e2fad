use super::row::LogRow;
use super::schema::{CONSUMPTION, DATE, MODE, ODOMETER, ROUTE};
use super::value::CellValue;
use chrono::NaiveDate;
use serde::Serialize;

/// A fuel-economy reading taken from the trip computer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionRow {
    pub date: Option<NaiveDate>, // ⇔ Date
    pub consumption: f64,        // ⇔ Consumption (km per unit of fuel)
    pub odometer: f64,           // ⇔ Odometer
    pub mode: String,            // ⇔ Mode
    pub route: String,           // ⇔ Route
}

impl ConsumptionRow {
    pub fn new(date: NaiveDate, consumption: f64, odometer: f64) -> Self {
        Self {
            date: Some(date),
            consumption,
            odometer,
            mode: String::new(),
            route: String::new(),
        }
    }

    pub fn from_row(row: &LogRow) -> Self {
        Self {
            date: row.date(DATE),
            consumption: row.numeric(CONSUMPTION),
            odometer: row.numeric(ODOMETER),
            mode: row.text(MODE).to_string(),
            route: row.text(ROUTE).to_string(),
        }
    }

    pub fn to_row(&self) -> LogRow {
        LogRow::new()
            .with(DATE, CellValue::Date(self.date))
            .with(CONSUMPTION, CellValue::Numeric(self.consumption))
            .with(ODOMETER, CellValue::Numeric(self.odometer))
            .with(MODE, CellValue::Text(self.mode.clone()))
            .with(ROUTE, CellValue::Text(self.route.clone()))
    }
}
