//! Core domain types and logic.

pub mod ohlcv;
pub mod indicator;
pub mod snapshot;
pub mod insight;
pub mod forecast;
pub mod events;
pub mod config_validation;
pub mod error;
