pub type AudiogradResult<T> = Result<T, AudiogradError>;

#[derive(thiserror::Error, Debug)]
pub enum AudiogradError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AudiogradError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
