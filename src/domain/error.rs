//! Domain error types.

/// Top-level error type for stocklens.
#[derive(Debug, thiserror::Error)]
pub enum StocklensError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("market data error: {reason}")]
    Data { reason: String },

    #[error("report data error: {reason}")]
    Report { reason: String },

    #[error("no price data for {code}")]
    NoData { code: String },

    #[error("event handler failed: {reason}")]
    Handler { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&StocklensError> for std::process::ExitCode {
    fn from(err: &StocklensError) -> Self {
        let code: u8 = match err {
            StocklensError::Io(_) => 1,
            StocklensError::ConfigParse { .. }
            | StocklensError::ConfigMissing { .. }
            | StocklensError::ConfigInvalid { .. } => 2,
            StocklensError::Data { .. } | StocklensError::NoData { .. } => 3,
            StocklensError::Report { .. } => 4,
            StocklensError::Handler { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
