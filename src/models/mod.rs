pub mod consumption;
pub mod driving_mode;
pub mod refill;
pub mod row;
pub mod schema;
pub mod value;

pub use consumption::ConsumptionRow;
pub use driving_mode::DrivingMode;
pub use refill::RefillRow;
pub use row::LogRow;
pub use schema::{Column, ColumnKind, LogKind, LogSchema, columns_for, schema_for};
pub use value::CellValue;
