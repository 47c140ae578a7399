//! Configuration validation.
//!
//! Rejects bad config before any data is read.

use crate::domain::error::StocklensError;
use crate::ports::config_port::ConfigPort;

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), StocklensError> {
    require_dir_key(config, "bars_dir")?;
    require_dir_key(config, "reports_dir")?;
    Ok(())
}

fn require_dir_key(config: &dyn ConfigPort, key: &str) -> Result<(), StocklensError> {
    let value = config
        .get_string("data", key)
        .ok_or_else(|| StocklensError::ConfigMissing {
            section: "data".to_string(),
            key: key.to_string(),
        })?;

    if value.trim().is_empty() {
        return Err(StocklensError::ConfigInvalid {
            section: "data".to_string(),
            key: key.to_string(),
            reason: "path must not be empty".to_string(),
        });
    }
    Ok(())
}
