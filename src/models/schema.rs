//! Schema registry: the canonical column set of each log kind.
//!
//! Schemas are compiled into the program. A schema is never edited in place;
//! adding a column means bumping `version` and appending to the column list,
//! and files written by older versions are reconciled on load.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogKind {
    Consumption,
    Refill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    Numeric,
    Text,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn col(name: &'static str, kind: ColumnKind) -> Column {
    Column { name, kind }
}

#[derive(Debug, Clone, Copy)]
pub struct LogSchema {
    pub kind: LogKind,
    pub version: u32,
    pub columns: &'static [Column],
    /// `(legacy header, current column)` pairs written by older versions.
    /// A legacy value seeds the current column only when the current one is
    /// absent from the file; the legacy column itself is kept.
    pub aliases: &'static [(&'static str, &'static str)],
}

impl LogSchema {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Legacy headers that can stand in for `column`.
    pub fn aliases_of<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.aliases
            .iter()
            .filter(move |(_, current)| *current == column)
            .map(|(legacy, _)| *legacy)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }
}

// Column names
pub const DATE: &str = "Date";
pub const CONSUMPTION: &str = "Consumption";
pub const ODOMETER: &str = "Odometer";
pub const MODE: &str = "Mode";
pub const ROUTE: &str = "Route";
pub const STATION: &str = "Station";
pub const FUEL_TYPE: &str = "FuelType";
pub const PRICE_PER_UNIT: &str = "PricePerUnit";
pub const QUANTITY: &str = "Quantity";
pub const TOTAL_COST: &str = "TotalCost";

static CONSUMPTION_COLUMNS: [Column; 5] = [
    col(DATE, ColumnKind::Date),
    col(CONSUMPTION, ColumnKind::Numeric),
    col(ODOMETER, ColumnKind::Numeric),
    col(MODE, ColumnKind::Text),
    col(ROUTE, ColumnKind::Text),
];

static REFILL_COLUMNS: [Column; 7] = [
    col(DATE, ColumnKind::Date),
    col(STATION, ColumnKind::Text),
    col(FUEL_TYPE, ColumnKind::Text),
    col(PRICE_PER_UNIT, ColumnKind::Numeric),
    col(QUANTITY, ColumnKind::Numeric),
    col(TOTAL_COST, ColumnKind::Numeric),
    col(ODOMETER, ColumnKind::Numeric),
];

static CONSUMPTION_SCHEMA: LogSchema = LogSchema {
    kind: LogKind::Consumption,
    version: 3,
    columns: &CONSUMPTION_COLUMNS,
    aliases: &[("Distance", ODOMETER), ("km/L", CONSUMPTION)],
};

static REFILL_SCHEMA: LogSchema = LogSchema {
    kind: LogKind::Refill,
    version: 2,
    columns: &REFILL_COLUMNS,
    aliases: &[
        ("Price", PRICE_PER_UNIT),
        ("Liters", QUANTITY),
        ("Total", TOTAL_COST),
        ("Fuel", FUEL_TYPE),
    ],
};

/// Ordered `(name, kind)` list declared for `kind`.
pub fn columns_for(kind: LogKind) -> &'static [Column] {
    schema_for(kind).columns
}

pub fn schema_for(kind: LogKind) -> &'static LogSchema {
    match kind {
        LogKind::Consumption => &CONSUMPTION_SCHEMA,
        LogKind::Refill => &REFILL_SCHEMA,
    }
}

impl LogKind {
    pub const ALL: [LogKind; 2] = [LogKind::Consumption, LogKind::Refill];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Consumption => "consumption",
            LogKind::Refill => "refill",
        }
    }

    /// Backing file name inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            LogKind::Consumption => "consumption.csv",
            LogKind::Refill => "refill.csv",
        }
    }

    /// Helper: convert CLI input (any case, short forms accepted)
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "consumption" | "cons" | "c" => Ok(LogKind::Consumption),
            "refill" | "fuel" | "r" => Ok(LogKind::Refill),
            other => Err(AppError::InvalidKind(format!(
                "'{}'. Use 'consumption' or 'refill'",
                other
            ))),
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
