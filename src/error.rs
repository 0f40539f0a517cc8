//! Error types for the gravity simulation

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors surfaced by scenario setup and stepping
#[derive(Error, Debug)]
pub enum SimError {
    /// Missing attractor, bad step size, or an invalid scenario value
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A body sits on top of the attractor, so the force law is undefined
    #[error("singularity: body `{body}` is {distance:e} m from the attractor")]
    Singularity { body: String, distance: f64 },

    /// Position or acceleration left the range of `f64`
    #[error("non-finite state: body `{body}` has {what}")]
    NonFinite { body: String, what: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SimError {
    pub fn config(msg: impl Into<String>) -> Self {
        SimError::Configuration(msg.into())
    }
}
