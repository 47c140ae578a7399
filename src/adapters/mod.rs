//! Concrete adapter implementations of the port traits.

pub mod csv_bars;
pub mod json_report;
pub mod file_config_adapter;
