use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Grid dimension must be at least 1")]
    ZeroGridDimension,

    #[error("Worker count must be at least 1")]
    ZeroWorkers,

    #[error("minPts must be at least 1")]
    ZeroMinPts,

    #[error("Epsilon must be a positive finite number, got {0}")]
    InvalidEps(f64),

    #[error("Queue capacity must be at least 1")]
    ZeroQueueCapacity,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
