use thiserror::Error;

/// Configuration errors raised by trail setters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrailError {
    #[error("lifetime must be positive, got {0}")]
    InvalidLifetime(f64),

    #[error("minimum distance must be finite and non-negative, got {0}")]
    InvalidMinDistance(f32),

    #[error("capacity must be at least 1")]
    ZeroCapacity,

    #[error("{0} needs at least one key")]
    EmptyKeys(&'static str),

    #[error("{kind} keys must be sorted by time (key {index} at {time})")]
    UnsortedKeys {
        kind: &'static str,
        index: usize,
        time: f32,
    },
}

pub type Result<T> = std::result::Result<T, TrailError>;
