use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MarkerError {
    #[error("Marker '{marker}' error: {message}")]
    Invocation { marker: String, message: String },

    #[error("Marker '{marker}' expected {expected} parameter(s), got {got}")]
    Arity {
        marker: String,
        expected: usize,
        got: usize,
    },
}

impl MarkerError {
    /// Convenience constructor for custom marker functions.
    pub fn invocation(marker: impl Into<String>, message: impl Into<String>) -> Self {
        MarkerError::Invocation {
            marker: marker.into(),
            message: message.into(),
        }
    }
}
