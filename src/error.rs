use thiserror::Error;

pub type GaugeResult<T> = Result<T, GaugeError>;

#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid numeric input for `{field}`")]
    InvalidNumericInput { field: &'static str },

    #[error("no gauge registered with id `{0}`")]
    UnknownGauge(String),

    #[error("a gauge with id `{0}` already exists")]
    DuplicateGauge(String),
}
