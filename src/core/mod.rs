pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod log;
pub mod scan;
pub mod stats;
