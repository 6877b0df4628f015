use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum EngineError {
    #[error("Sampling requires at least one point, got {0}")]
    EmptySampling(usize),

    #[error("Invalid sampling range: {start}..={end}")]
    InvalidRange { start: f64, end: f64 },
}
