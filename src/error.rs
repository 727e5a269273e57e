use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidBound { name: &'static str, value: f64 },
    #[error("minScale ({min}) is greater than maxScale ({max})")]
    InvertedBounds { min: f64, max: f64 },
    #[error("initialScale must be finite, got {0}")]
    InvalidInitialScale(f64),
    #[error("invalid zoom configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PinchZoomError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no document available to attach drag listeners to")]
    NoDocument,
    #[error("failed to register `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },
}
