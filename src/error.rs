use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset index {index} out of bounds (dataset count: {len})")]
    DatasetIndexOutOfRange { index: usize, len: usize },

    #[error("drawing surface failure: {0}")]
    Backend(String),
}
