use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CyclerError {
    #[error("invalid typing cycler configuration: {0}")]
    InvalidConfiguration(String),
}

impl CyclerError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CyclerError::InvalidConfiguration(msg.into())
    }
}
