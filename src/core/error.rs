use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResampleError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unsupported distance metric: {0}")]
    InvalidMetric(String),

    #[error("dimension mismatch: expected {expected} values, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("insufficient neighbors: {required} required, {available} available")]
    InsufficientNeighbors { required: usize, available: usize },
}

impl ResampleError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ResampleError::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ResampleError>;
