//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Raised when the capacitor geometry, material constants or sampling
    /// density cannot produce a valid sample set.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl FieldError {
    pub(crate) fn geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_geometry_message_names_constraint() {
        let err = FieldError::geometry("r_a must be smaller than r_d");
        assert_eq!(err.to_string(), "invalid geometry: r_a must be smaller than r_d");
    }
}
