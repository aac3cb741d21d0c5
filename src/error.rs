use thiserror::Error;

/// Errors raised while loading or building a validator configuration.
///
/// Validation itself never fails, an invalid number is just `false`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid validator configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Label keys cannot be empty")]
    EmptyLabelKey,

    #[error("The label key `{0}` is reserved")]
    ReservedLabelKey(String),
}

impl ConfigError {
    pub fn is_label_error(&self) -> bool {
        matches!(
            self,
            ConfigError::EmptyLabelKey | ConfigError::ReservedLabelKey(_)
        )
    }
}
